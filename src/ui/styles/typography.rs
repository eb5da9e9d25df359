//! Typography for the glyphboard UI

use super::colors::UiColors;
use bevy_egui::egui;

/// Text size presets
pub struct TextSize;

impl TextSize {
    /// Panel headings
    pub const MD: f32 = 24.0;

    /// Status line, modal title
    pub const SM: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    /// Hints, captions
    pub const CAPTION: f32 = 12.0;

    /// Probability readout in the side panels
    pub const FIGURE: f32 = 32.0;

    /// Promotion choices
    pub const GLYPH_BUTTON: f32 = 48.0;
}

/// Helper functions for creating styled text
pub struct TextStyle;

impl TextStyle {
    pub fn heading(text: impl Into<String>, size: f32) -> egui::RichText {
        egui::RichText::new(text)
            .size(size)
            .color(UiColors::TEXT_PRIMARY)
            .strong()
    }

    pub fn body(text: impl Into<String>) -> egui::RichText {
        egui::RichText::new(text)
            .size(TextSize::BODY)
            .color(UiColors::TEXT_SECONDARY)
    }

    /// Small, less prominent text
    pub fn caption(text: impl Into<String>) -> egui::RichText {
        egui::RichText::new(text)
            .size(TextSize::CAPTION)
            .color(UiColors::TEXT_TERTIARY)
    }

    /// Gold text for the active side
    pub fn accent(text: impl Into<String>, size: f32) -> egui::RichText {
        egui::RichText::new(text)
            .size(size)
            .color(UiColors::ACCENT_GOLD)
            .strong()
    }
}
