//! Promotion modal results
//!
//! A choice completes the deferred pawn move; a dismissal drops it and leaves
//! the position untouched.

use crate::game::events::{CycleReason, OpponentCycleRequested, PromotionChosen, PromotionDismissed};
use crate::game::resources::ActiveSession;
use bevy::prelude::*;

pub fn handle_promotion_choice(
    mut chosen: MessageReader<PromotionChosen>,
    mut dismissed: MessageReader<PromotionDismissed>,
    mut session: ResMut<ActiveSession>,
    mut cycle_requests: MessageWriter<OpponentCycleRequested>,
) {
    for _ in dismissed.read() {
        session.dismiss_promotion();
    }

    for choice in chosen.read() {
        let outcome = session.choose_promotion(choice.piece);
        if outcome.moved() {
            cycle_requests.write(OpponentCycleRequested {
                reason: CycleReason::HumanMoved,
            });
        } else {
            debug!("[PROMOTION] Choice {} had no effect: {:?}", choice.piece.name(), outcome);
        }
    }
}
