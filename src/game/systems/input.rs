//! Board click handling
//!
//! Feeds [`CellClicked`] messages into the session's selection controller and
//! schedules the opponent once a human move lands.

use crate::game::events::{CellClicked, CycleReason, OpponentCycleRequested};
use crate::game::resources::ActiveSession;
use crate::session::ClickOutcome;
use bevy::prelude::*;

pub fn handle_cell_clicks(
    mut clicks: MessageReader<CellClicked>,
    mut session: ResMut<ActiveSession>,
    mut cycle_requests: MessageWriter<OpponentCycleRequested>,
) {
    for click in clicks.read() {
        match session.click(click.cell) {
            ClickOutcome::Ignored => {
                debug!("[INPUT] Click on {} ignored", click.cell);
            }
            ClickOutcome::MoveApplied(_) => {
                cycle_requests.write(OpponentCycleRequested {
                    reason: CycleReason::HumanMoved,
                });
            }
            ClickOutcome::Selected { .. }
            | ClickOutcome::Deselected
            | ClickOutcome::PromotionPending
            | ClickOutcome::MoveRejected(_) => {}
        }
    }
}
