//! UI components for the documentation hub

pub mod card;
pub mod detail;
pub mod error;
pub mod grid;
pub mod search;

use eframe::egui::Color32;

/// Window background
pub const BACKGROUND: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a);
/// Card background
pub const CARD_BACKGROUND: Color32 = Color32::from_rgb(0x2a, 0x2a, 0x2a);
/// Code block background
pub const CODE_BACKGROUND: Color32 = Color32::from_rgb(0x28, 0x2c, 0x34);
/// Accent for dividers and highlights
pub const ACCENT: Color32 = Color32::from_rgb(0x00, 0xff, 0x00);
/// Error text
pub const ERROR_TEXT: Color32 = Color32::from_rgb(224, 108, 117);
