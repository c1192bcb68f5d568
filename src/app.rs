//! Main application state and UI coordination

use eframe::egui::{self, FontId, RichText};

use crate::core::document::Document;
use crate::core::filter::filter_documents;
use crate::core::store::StoreError;
use crate::ui;
use crate::ui::detail::DetailPanel;
use crate::ui::error::ErrorScreen;
use crate::ui::grid::CardGrid;
use crate::ui::search::SearchBar;

/// Main application state
pub struct DochubApp {
    /// Immutable snapshot of all documents, loaded once at startup
    pub snapshot: Vec<Document>,
    /// Terminal startup failure, if any
    pub load_error: Option<StoreError>,
    /// Current search query
    pub search_query: String,
    /// Documents matching the current query, in snapshot order
    pub filtered: Vec<Document>,
    /// Document shown in the detail panel
    pub selected: Option<Document>,
    /// Commonmark cache shared by the markdown views
    pub commonmark_cache: egui_commonmark::CommonMarkCache,
}

impl DochubApp {
    /// Create the application from the startup fetch outcome.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        outcome: Result<Vec<Document>, StoreError>,
    ) -> Self {
        Self::configure_style(&cc.egui_ctx);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let (snapshot, load_error) = match outcome {
            Ok(docs) => (docs, None),
            Err(err) => (Vec::new(), Some(err)),
        };

        Self {
            filtered: snapshot.clone(),
            snapshot,
            load_error,
            search_query: String::new(),
            selected: None,
            commonmark_cache: egui_commonmark::CommonMarkCache::default(),
        }
    }

    /// Dark visuals in the hub's palette
    fn configure_style(ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = ui::BACKGROUND;
        visuals.window_fill = ui::BACKGROUND;
        visuals.extreme_bg_color = ui::CARD_BACKGROUND;
        visuals.selection.stroke = egui::Stroke::new(1.0, ui::ACCENT);
        ctx.set_visuals(visuals);
    }

    /// Recompute the filtered view from the immutable snapshot.
    pub fn apply_filter(&mut self) {
        self.filtered = filter_documents(&self.snapshot, &self.search_query)
            .into_iter()
            .cloned()
            .collect();
    }

    /// Open the detail panel for a document.
    pub fn open_detail(&mut self, doc: Document) {
        self.selected = Some(doc);
    }

    /// Close the detail panel.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Render the header with the title and the search bar
    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.heading(RichText::new("Documentation Hub").strong());
                ui.label(
                    RichText::new("</>")
                        .font(FontId::monospace(22.0))
                        .color(ui::ACCENT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} of {} documents",
                            self.filtered.len(),
                            self.snapshot.len()
                        ))
                        .weak()
                        .small(),
                    );
                });
            });
            ui.add_space(5.0);
            if SearchBar::show(ui, &mut self.search_query) {
                self.apply_filter();
            }
            ui.add_space(10.0);
        });
    }
}

impl eframe::App for DochubApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Startup failure is terminal: error state only, zero cards
        if let Some(ref error) = self.load_error {
            egui::CentralPanel::default().show(ctx, |ui| {
                ErrorScreen::show(ui, error);
            });
            return;
        }

        // Keyboard shortcuts
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) {
                self.selected = None;
            }
        });

        self.render_header(ctx);

        // Detail panel at the bottom when a card is selected
        if self.selected.is_some() {
            egui::TopBottomPanel::bottom("detail_panel")
                .resizable(true)
                .default_height(400.0)
                .min_height(200.0)
                .show(ctx, |ui| {
                    DetailPanel::show(ui, self);
                });
        }

        // Card grid
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("grid_scroll")
                .show(ui, |ui| {
                    CardGrid::show(ui, self);
                });
        });
    }
}
