//! Search input driving the filter

use eframe::egui::{self, Ui};

/// Single-line search field
pub struct SearchBar;

impl SearchBar {
    /// Show the search field; returns true when the query changed.
    pub fn show(ui: &mut Ui, query: &mut String) -> bool {
        ui.add(
            egui::TextEdit::singleline(query)
                .hint_text("Search documents...")
                .desired_width(f32::INFINITY),
        )
        .changed()
    }
}
