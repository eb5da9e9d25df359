//! Session lifecycle systems
//!
//! The first opponent cycle is requested at startup so that a human playing
//! Black sees the opponent open. [`handle_new_game`] resets the session, drops
//! any in-flight evaluation and requests the next opening cycle.

use crate::core::AppConfig;
use crate::game::events::{CycleReason, NewGameRequested, OpponentCycleRequested};
use crate::game::resources::{ActiveSession, OpponentCycle};
use bevy::prelude::*;

pub fn request_opening_cycle(mut cycle_requests: MessageWriter<OpponentCycleRequested>) {
    cycle_requests.write(OpponentCycleRequested {
        reason: CycleReason::SessionStart,
    });
}

pub fn handle_new_game(
    mut requests: MessageReader<NewGameRequested>,
    config: Res<AppConfig>,
    mut session: ResMut<ActiveSession>,
    mut cycle: ResMut<OpponentCycle>,
    mut cycle_requests: MessageWriter<OpponentCycleRequested>,
) {
    // Several clicks in one frame still mean one new game
    if requests.read().count() == 0 {
        return;
    }

    if !cycle.is_idle() {
        debug!("[SESSION] Dropping running opponent cycle {:?}", *cycle);
    }
    *cycle = OpponentCycle::Idle;
    session.new_game(config.human_side);

    cycle_requests.write(OpponentCycleRequested {
        reason: CycleReason::SessionStart,
    });
}
