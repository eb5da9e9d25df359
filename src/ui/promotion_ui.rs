//! Pawn Promotion UI
//!
//! Modal shown while the session holds a pending promotion. Picking a piece
//! completes the move; "Cancel" or Escape drops it.

use crate::game::events::{PromotionChosen, PromotionDismissed};
use crate::session::{BoardPiece, PromotionPiece};
use crate::ui::styles::*;
use crate::ui::system_params::PromotionUiParams;
use bevy_egui::egui;

/// System to display the pawn promotion selection UI
pub fn promotion_ui_system(mut params: PromotionUiParams) {
    let Some(pending) = params.session.pending_promotion() else {
        return;
    };

    let Ok(ctx) = params.contexts.ctx_mut() else {
        return;
    };

    // Create a modal overlay
    egui::Area::new(egui::Id::new("promotion_overlay"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_rect = ui.ctx().screen_rect();
            ui.painter()
                .rect_filled(screen_rect, 0.0, UiColors::BG_OVERLAY);
        });

    let mut choice = None;
    let mut dismissed = ctx.input(|i| i.key_pressed(egui::Key::Escape));

    egui::Window::new("Promote Pawn")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_MID)
                .corner_radius(12.0)
                .inner_margin(20.0)
                .stroke(egui::Stroke::new(2.0, UiColors::BORDER)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(TextStyle::heading(
                    format!("Promote on {}", pending.to),
                    TextSize::SM,
                ));
                ui.add_space(15.0);

                ui.horizontal(|ui| {
                    for piece in PromotionPiece::ALL {
                        let glyph = BoardPiece::new(pending.side, piece.kind()).glyph();
                        let button = egui::Button::new(
                            egui::RichText::new(glyph.to_string())
                                .size(TextSize::GLYPH_BUTTON)
                                .color(UiColors::TEXT_PRIMARY),
                        )
                        .min_size(egui::vec2(70.0, 70.0))
                        .fill(UiColors::BG_DARK);

                        if ui.add(button).on_hover_text(piece.name()).clicked() {
                            choice = Some(piece);
                        }
                        ui.add_space(5.0);
                    }
                });

                ui.add_space(10.0);
                if ui.button(TextStyle::body("Cancel")).clicked() {
                    dismissed = true;
                }
            });
        });

    if let Some(piece) = choice {
        params.chosen.write(PromotionChosen { piece });
    } else if dismissed {
        params.dismissed.write(PromotionDismissed);
    }
}
