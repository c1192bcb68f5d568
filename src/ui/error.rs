//! Full-screen error state for startup failures

use eframe::egui::{FontId, RichText, Ui};

use crate::core::store::StoreError;

/// Terminal error screen; no document cards are rendered behind it
pub struct ErrorScreen;

impl ErrorScreen {
    /// Show the failure, with a remediation hint when one applies.
    pub fn show(ui: &mut Ui, error: &StoreError) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(
                RichText::new("\u{26A0}")
                    .font(FontId::proportional(48.0))
                    .color(super::ERROR_TEXT),
            );
            ui.add_space(10.0);
            ui.label(RichText::new(error.to_string()).color(super::ERROR_TEXT));
            if let Some(hint) = error.hint() {
                ui.add_space(5.0);
                ui.label(hint);
            }
        });
    }
}
