//! In-game UI
//!
//! - Top bar: status line, "New game" button and "Play as" selector
//! - Side panels: one per player, the side to move highlighted, with its
//!   win probability
//! - Bottom bar: the opponent's last move and the evaluator in use
//! - Centre: the board (see [`super::board_ui`])
//!
//! Runs in `EguiPrimaryContextPass`. Clicks and buttons are turned into
//! messages for the game systems.

use crate::game::events::{CellClicked, NewGameRequested};
use crate::session::{Lead, ProbabilityDisplay, Side};
use crate::ui::board_ui::board_widget;
use crate::ui::styles::*;
use crate::ui::system_params::GameUiParams;
use bevy::prelude::*;
use bevy_egui::egui;

pub fn game_ui_system(mut params: GameUiParams) {
    let Ok(ctx) = params.contexts.ctx_mut() else {
        return;
    };

    let session = &params.session;
    let status = session.status();
    let human = session.human_side();

    // === TOP BAR: status, new game, play as ===
    egui::TopBottomPanel::top("status_bar")
        .resizable(false)
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_DARK)
                .inner_margin(10.0),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(TextStyle::heading(&status.text, TextSize::SM));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(TextStyle::body("New game"))
                        .on_hover_text("Start over with the side chosen below")
                        .clicked()
                    {
                        info!("[UI] New game requested");
                        params.new_game.write(NewGameRequested);
                    }

                    ui.add_space(12.0);

                    let mut side = params.config.human_side;
                    ui.selectable_value(&mut side, Side::Black, "Black");
                    ui.selectable_value(&mut side, Side::White, "White");
                    ui.label(TextStyle::caption("Play as"));
                    // Only touch the config on a real change so the save system stays quiet
                    if side != params.config.human_side {
                        info!("[UI] Next game as {}", side);
                        params.config.human_side = side;
                    }
                });
            });
        });

    // === BOTTOM BAR: last opponent move, evaluator ===
    egui::TopBottomPanel::bottom("move_bar")
        .resizable(false)
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_DARK)
                .inner_margin(8.0),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let last = session.last_opponent_move().unwrap_or("-");
                ui.label(TextStyle::body(format!("Opponent's last move: {}", last)));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let source = params
                        .evaluator
                        .name()
                        .map(|name| format!("Evaluator: {}", name))
                        .unwrap_or_else(|| "Evaluator: none (random moves)".to_string());
                    ui.label(TextStyle::caption(source));
                });
            });
        });

    // === SIDE PANELS ===
    let opponent = session.opponent_side();
    egui::SidePanel::left("opponent_panel")
        .resizable(false)
        .exact_width(180.0)
        .frame(panel_frame(status.active_side == Some(opponent)))
        .show(ctx, |ui| {
            player_panel(
                ui,
                opponent,
                human,
                status.evaluation.opponent,
                status.active_side == Some(opponent),
                status.evaluation.lead == Some(Lead::Opponent),
            );
        });

    egui::SidePanel::right("human_panel")
        .resizable(false)
        .exact_width(180.0)
        .frame(panel_frame(status.active_side == Some(human)))
        .show(ctx, |ui| {
            player_panel(
                ui,
                human,
                human,
                status.evaluation.human,
                status.active_side == Some(human),
                status.evaluation.lead == Some(Lead::Human),
            );
            if status.evaluation.lead == Some(Lead::Balanced) {
                ui.add_space(6.0);
                ui.label(TextStyle::caption(Lead::Balanced.label()));
            }
        });

    // === BOARD ===
    let view = session.board_view();
    let mut clicked = None;
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(UiColors::BG_MID).inner_margin(16.0))
        .show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                clicked = board_widget(ui, &view, status.label.as_deref());
            });
        });

    if let Some(cell) = clicked {
        params.cell_clicks.write(CellClicked { cell });
    }
}

fn panel_frame(active: bool) -> egui::Frame {
    let border = if active {
        UiColors::ACCENT_GOLD
    } else {
        UiColors::BORDER
    };
    egui::Frame::default()
        .fill(UiColors::BG_DARK)
        .inner_margin(14.0)
        .stroke(egui::Stroke::new(2.0, border))
}

fn player_panel(
    ui: &mut egui::Ui,
    side: Side,
    human: Side,
    probability: ProbabilityDisplay,
    active: bool,
    leading: bool,
) {
    ui.vertical_centered(|ui| {
        let title = side_title(side, human);
        if active {
            ui.label(TextStyle::accent(title, TextSize::MD));
            ui.label(TextStyle::caption("to move"));
        } else {
            ui.label(TextStyle::heading(title, TextSize::MD));
            ui.label(TextStyle::caption(" "));
        }

        ui.add_space(18.0);
        ui.label(TextStyle::caption("Win probability"));
        ui.label(TextStyle::heading(probability.to_string(), TextSize::FIGURE));

        if leading {
            let text = if side == human {
                Lead::Human.label()
            } else {
                Lead::Opponent.label()
            };
            ui.label(egui::RichText::new(text).color(UiColors::INFO));
        }
    });
}

/// Panel title for a side ("White (you)")
fn side_title(side: Side, human: Side) -> String {
    if side == human {
        format!("{} (you)", side)
    } else {
        format!("{} (opponent)", side)
    }
}
