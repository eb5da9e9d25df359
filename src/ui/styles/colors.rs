//! Color palette for the glyphboard UI
//!
//! Dark panels around a classic green/cream board, with gold for the selected
//! piece and the active side.

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    // === Background Colors ===

    /// Primary dark background (main panels)
    pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(20, 20, 25);

    /// Secondary background (nested panels, modal)
    pub const BG_MID: egui::Color32 = egui::Color32::from_rgb(30, 30, 35);

    /// Modal backdrop
    pub const BG_OVERLAY: egui::Color32 = egui::Color32::from_black_alpha(180);

    // === Accent Colors ===

    /// Active side panel, selected cell
    pub const ACCENT_GOLD: egui::Color32 = egui::Color32::from_rgb(218, 165, 32);

    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

    pub const INFO: egui::Color32 = egui::Color32::from_rgb(70, 130, 220);

    // === Text Colors ===

    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(200, 200, 205);

    /// Hints, captions
    pub const TEXT_TERTIARY: egui::Color32 = egui::Color32::from_rgb(150, 150, 155);

    // === Chess-specific Colors ===

    /// Glyph color for both sides; white pieces use the outlined glyphs
    pub const PIECE_INK: egui::Color32 = egui::Color32::from_rgb(15, 15, 20);

    /// Light square color (classic chess board)
    pub const SQUARE_LIGHT: egui::Color32 = egui::Color32::from_rgb(238, 238, 210);

    /// Dark square color (classic chess board)
    pub const SQUARE_DARK: egui::Color32 = egui::Color32::from_rgb(118, 150, 86);

    /// Tint for the squares of the last move
    pub const LAST_MOVE: egui::Color32 = egui::Color32::from_rgb(246, 246, 105);

    /// Dot on legal destinations
    pub const DESTINATION: egui::Color32 = egui::Color32::from_rgb(30, 30, 30);

    /// Border color
    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(60, 60, 65);
}

/// Helper functions for color variations
pub struct ColorUtils;

impl ColorUtils {
    /// Create a semi-transparent version of a color
    pub fn with_alpha(color: egui::Color32, alpha: u8) -> egui::Color32 {
        let [r, g, b, _] = color.to_array();
        egui::Color32::from_rgba_unmultiplied(r, g, b, alpha)
    }

    /// Linear blend of two opaque colors, `t` in [0, 1]
    pub fn mix(a: egui::Color32, b: egui::Color32, t: f32) -> egui::Color32 {
        let t = t.clamp(0.0, 1.0);
        let channel = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
        egui::Color32::from_rgb(
            channel(a.r(), b.r()),
            channel(a.g(), b.g()),
            channel(a.b(), b.b()),
        )
    }
}
