//! Opponent cycle systems
//!
//! [`schedule_opponent_cycle`] turns requests into a delayed cycle (or folds
//! them into the one already running), [`advance_opponent_cycle`] starts the
//! evaluation once the delay has passed and applies the result when the task
//! finishes. The evaluator runs on the `AsyncComputeTaskPool` and is polled
//! once per frame.

use crate::core::AppConfig;
use crate::game::events::{CycleReason, OpponentCycleRequested};
use crate::game::resources::{ActiveSession, EvaluatorHandoff, EvaluatorSlot, OpponentCycle};
use crate::session::{CycleOutcome, EvaluatorError};
use bevy::prelude::*;
use bevy::tasks::{block_on, AsyncComputeTaskPool};
use futures_lite::future;
use std::time::Duration;

/// Install evaluators handed over through the channel
///
/// Each arrival counts as a readiness signal and requests one cycle.
pub fn receive_evaluators(
    handoff: Option<Res<EvaluatorHandoff>>,
    mut slot: ResMut<EvaluatorSlot>,
    mut cycle_requests: MessageWriter<OpponentCycleRequested>,
) {
    let Some(handoff) = handoff else {
        return;
    };

    for evaluator in handoff.try_iter() {
        info!("[OPPONENT] Evaluator '{}' installed", evaluator.name());
        slot.0 = Some(evaluator);
        cycle_requests.write(OpponentCycleRequested {
            reason: CycleReason::EvaluatorReady,
        });
    }
}

/// Start the delay for a requested cycle unless one is already under way
pub fn schedule_opponent_cycle(
    mut requests: MessageReader<OpponentCycleRequested>,
    mut cycle: ResMut<OpponentCycle>,
    config: Res<AppConfig>,
) {
    let mut delay = None;
    for request in requests.read() {
        let wait = cycle_delay(request.reason, &config);
        delay = Some(delay.map_or(wait, |d: Duration| d.max(wait)));
    }

    let Some(delay) = delay else {
        return;
    };

    if cycle.is_idle() {
        *cycle = OpponentCycle::Waiting(Timer::new(delay, TimerMode::Once));
    } else {
        debug!("[OPPONENT] Cycle already running ({:?}), request folded in", *cycle);
    }
}

/// Pause before a cycle of the given kind starts
///
/// Anything that follows a human move waits the configured delay, including a
/// rerun after the human moved during an evaluation. Session start and
/// evaluator readiness run on the next tick.
pub fn cycle_delay(reason: CycleReason, config: &AppConfig) -> Duration {
    match reason {
        CycleReason::HumanMoved | CycleReason::PositionChanged => config.opponent_delay(),
        CycleReason::SessionStart | CycleReason::EvaluatorReady => Duration::ZERO,
    }
}

/// Move the running cycle forward
pub fn advance_opponent_cycle(
    time: Res<Time>,
    mut cycle: ResMut<OpponentCycle>,
    mut session: ResMut<ActiveSession>,
    slot: Res<EvaluatorSlot>,
    mut cycle_requests: MessageWriter<OpponentCycleRequested>,
) {
    match &mut *cycle {
        OpponentCycle::Idle => {}
        OpponentCycle::Waiting(timer) => {
            timer.tick(time.delta());
            if !timer.is_finished() {
                return;
            }

            let Some(request) = session.begin_evaluation() else {
                debug!("[OPPONENT] Game over, cycle skipped");
                *cycle = OpponentCycle::Idle;
                return;
            };

            match slot.0.clone() {
                Some(evaluator) => {
                    debug!(
                        "[OPPONENT] Asking '{}' about {}",
                        evaluator.name(),
                        request.position_id
                    );
                    let position_id = request.position_id.clone();
                    let task = AsyncComputeTaskPool::get()
                        .spawn(async move { evaluator.evaluate(&position_id).await });
                    *cycle = OpponentCycle::Evaluating { request, task };
                }
                None => {
                    *cycle = OpponentCycle::Idle;
                    let outcome =
                        session.complete_evaluation(&request, Err(EvaluatorError::Unavailable));
                    follow_up(outcome, &mut cycle_requests);
                }
            }
        }
        OpponentCycle::Evaluating { task, .. } => {
            if !task.is_finished() {
                return;
            }

            let OpponentCycle::Evaluating { request, mut task } = std::mem::take(&mut *cycle)
            else {
                return;
            };
            match block_on(future::poll_once(&mut task)) {
                Some(result) => {
                    let outcome = session.complete_evaluation(&request, result);
                    follow_up(outcome, &mut cycle_requests);
                }
                None => warn!("[OPPONENT] Finished evaluation task yielded no result"),
            }
        }
    }
}

fn follow_up(outcome: CycleOutcome, cycle_requests: &mut MessageWriter<OpponentCycleRequested>) {
    match outcome {
        CycleOutcome::Outdated => {
            cycle_requests.write(OpponentCycleRequested {
                reason: CycleReason::PositionChanged,
            });
        }
        CycleOutcome::Stale => debug!("[OPPONENT] Stale result discarded"),
        CycleOutcome::GameOver => debug!("[OPPONENT] Game ended during evaluation"),
        CycleOutcome::Completed { .. } => {}
    }
}
