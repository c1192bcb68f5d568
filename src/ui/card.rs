//! Clickable document card for the grid

use eframe::egui::{self, Color32, FontId, RichText, Ui};

use crate::core::document::Document;

/// A single document card showing title and category
pub struct DocCard;

impl DocCard {
    /// Render one card; the returned response reports clicks.
    pub fn show(ui: &mut Ui, doc: &Document) -> egui::Response {
        let frame = egui::Frame::new()
            .fill(super::CARD_BACKGROUND)
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::same(15));

        let inner = frame.show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(&doc.title)
                    .font(FontId::proportional(18.0))
                    .strong(),
            );
            ui.add_space(5.0);
            ui.label(
                RichText::new(format!("Category: {}", doc.category))
                    .italics()
                    .weak(),
            );
        });

        let response = inner
            .response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.hovered() {
            ui.painter().rect_stroke(
                response.rect,
                egui::CornerRadius::same(10),
                egui::Stroke::new(1.0, Color32::from_rgba_unmultiplied(0, 255, 0, 80)),
                egui::StrokeKind::Outside,
            );
        }

        response
    }
}
