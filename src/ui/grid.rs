//! Responsive card grid over the filtered snapshot

use eframe::egui::Ui;

use super::card::DocCard;
use crate::app::DochubApp;

/// Vertical gap between grid rows.
const ROW_SPACING: f32 = 20.0;

/// Grid of document cards
pub struct CardGrid;

impl CardGrid {
    /// Show the grid for the current filtered view.
    pub fn show(ui: &mut Ui, app: &mut DochubApp) {
        if app.filtered.is_empty() {
            Self::show_empty(ui, app.snapshot.is_empty());
            return;
        }

        let cols = columns_for_width(ui.available_width());
        let mut clicked = None;

        for row in app.filtered.chunks(cols) {
            ui.columns(cols, |columns| {
                for (slot, doc) in row.iter().enumerate() {
                    if DocCard::show(&mut columns[slot], doc).clicked() {
                        clicked = Some(doc.clone());
                    }
                }
            });
            ui.add_space(ROW_SPACING);
        }

        if let Some(doc) = clicked {
            app.open_detail(doc);
        }
    }

    /// Empty state, distinguishing an empty collection from an empty match
    fn show_empty(ui: &mut Ui, collection_empty: bool) {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            if collection_empty {
                ui.label("No documents in the collection");
            } else {
                ui.label("No documents match your search");
            }
        });
    }
}

/// Column count for the available width, 1 through 4.
pub fn columns_for_width(width: f32) -> usize {
    if width >= 1200.0 {
        4
    } else if width >= 900.0 {
        3
    } else if width >= 560.0 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for_width(320.0), 1);
        assert_eq!(columns_for_width(560.0), 2);
        assert_eq!(columns_for_width(1024.0), 3);
        assert_eq!(columns_for_width(1280.0), 4);
    }
}
