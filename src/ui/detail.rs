//! Detail panel rendering a document's markdown body and code snippet

use eframe::egui::{self, FontId, RichText, Ui};
use egui_commonmark::CommonMarkViewer;

use crate::app::DochubApp;

/// Fence language for the code snippet; the collection stores Python code.
const CODE_FENCE_LANG: &str = "python";
/// Markdown rendered when a document has no body.
const EMPTY_BODY: &str = "*No document content*";
/// Snippet rendered when a document has no code.
const EMPTY_CODE: &str = "# No code found";

/// Detail view for the selected document
pub struct DetailPanel;

impl DetailPanel {
    /// Show the detail view for the currently selected document.
    pub fn show(ui: &mut Ui, app: &mut DochubApp) {
        // Clone up front to avoid borrow conflicts with the close control
        let Some(doc) = app.selected.clone() else {
            return;
        };

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&doc.title)
                    .font(FontId::proportional(24.0))
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("\u{2715}").on_hover_text("Close").clicked() {
                    app.close_detail();
                }
            });
        });
        ui.label(
            RichText::new(format!("Category: {}", doc.category))
                .italics()
                .weak(),
        );
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("detail_scroll")
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                let body = if doc.body.is_empty() {
                    EMPTY_BODY
                } else {
                    doc.body.as_str()
                };
                CommonMarkViewer::new().show(ui, &mut app.commonmark_cache, body);

                ui.add_space(10.0);
                ui.label(
                    RichText::new("Code:")
                        .font(FontId::proportional(16.0))
                        .strong(),
                );
                Self::show_code(ui, app, &doc.code);
            });
    }

    /// Render the code snippet as a fenced block inside a dark frame.
    fn show_code(ui: &mut Ui, app: &mut DochubApp, code: &str) {
        let code = if code.is_empty() { EMPTY_CODE } else { code };
        let fenced = format!("```{}\n{}\n```", CODE_FENCE_LANG, code);

        egui::Frame::new()
            .fill(super::CODE_BACKGROUND)
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                CommonMarkViewer::new().show(ui, &mut app.commonmark_cache, &fenced);
            });
    }
}
