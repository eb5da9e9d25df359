//! Opponent cycle state and evaluator plumbing
//!
//! # Cycle states
//!
//! ```text
//! Idle --request--> Waiting(delay) --timer--> Evaluating(task) --result--> Idle
//! ```
//!
//! Without an evaluator the cycle goes straight from `Waiting` back to `Idle`,
//! applying the random fallback on the spot.
//!
//! # Handoff
//!
//! Evaluators become available at any time (the browser registers one from
//! JavaScript once its model has loaded). Whoever owns an [`EvaluatorSender`]
//! pushes the evaluator into the channel; [`EvaluatorHandoff`] is drained every
//! frame and each received evaluator replaces the one in [`EvaluatorSlot`].

use crate::session::{Evaluation, EvaluationRequest, Evaluator, EvaluatorError};
use bevy::prelude::*;
use bevy::tasks::Task;
use crossbeam_channel::{Receiver, Sender, TryIter};
use std::sync::Arc;

pub type EvaluationTask = Task<Result<Evaluation, EvaluatorError>>;

/// Where the opponent cycle currently is
#[derive(Resource, Default)]
pub enum OpponentCycle {
    #[default]
    Idle,
    /// Counting down the delay before evaluating
    Waiting(Timer),
    /// Evaluator call in flight
    Evaluating {
        request: EvaluationRequest,
        task: EvaluationTask,
    },
}

impl OpponentCycle {
    pub fn is_idle(&self) -> bool {
        matches!(self, OpponentCycle::Idle)
    }
}

impl std::fmt::Debug for OpponentCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpponentCycle::Idle => f.write_str("Idle"),
            OpponentCycle::Waiting(timer) => f
                .debug_tuple("Waiting")
                .field(&timer.remaining())
                .finish(),
            OpponentCycle::Evaluating { request, .. } => f
                .debug_struct("Evaluating")
                .field("session", &request.session)
                .finish(),
        }
    }
}

/// The installed evaluator, if any
#[derive(Resource, Default, Clone)]
pub struct EvaluatorSlot(pub Option<Arc<dyn Evaluator>>);

impl EvaluatorSlot {
    pub fn name(&self) -> Option<&str> {
        self.0.as_deref().map(|evaluator| evaluator.name())
    }
}

/// Sending half of the evaluator channel; cheap to clone
#[derive(Clone)]
pub struct EvaluatorSender(Sender<Arc<dyn Evaluator>>);

impl EvaluatorSender {
    /// Hand an evaluator to the app; false if the app has shut down
    pub fn install(&self, evaluator: Arc<dyn Evaluator>) -> bool {
        self.0.send(evaluator).is_ok()
    }
}

/// Receiving half, drained by the game systems
#[derive(Resource)]
pub struct EvaluatorHandoff(Receiver<Arc<dyn Evaluator>>);

impl EvaluatorHandoff {
    /// Evaluators sent since the last call, without blocking
    pub fn try_iter(&self) -> TryIter<'_, Arc<dyn Evaluator>> {
        self.0.try_iter()
    }
}

/// Create a connected sender/handoff pair
pub fn evaluator_channel() -> (EvaluatorSender, EvaluatorHandoff) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (EvaluatorSender(tx), EvaluatorHandoff(rx))
}
