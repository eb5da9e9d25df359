//! Error types for the session core
//!
//! Rules rejections and evaluator failures are both recovered locally: a
//! rejected move clears the selection and a failed evaluation falls back to a
//! random move. Neither is ever shown to the player.

use super::types::Cell;

/// Reasons the rules collaborator refuses a move or a position
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// No legal move matches the request
    #[error("Illegal move: {from}{to}")]
    IllegalMove { from: Cell, to: Cell },

    /// The move reaches the last rank but no promotion piece was given
    #[error("Promotion piece required for {from}{to}")]
    PromotionRequired { from: Cell, to: Cell },

    /// The game is already over
    #[error("Game is over, no further moves accepted")]
    GameOver,

    /// A configured position could not be loaded
    #[error("Invalid position '{fen}': {message}")]
    InvalidPosition { fen: String, message: String },
}

/// Failures of the optional evaluation collaborator
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluatorError {
    /// No evaluator is installed (yet)
    #[error("No evaluator available")]
    Unavailable,

    /// The request never produced a response
    #[error("Evaluator transport failed: {0}")]
    Transport(String),

    /// A response arrived but could not be used
    #[error("Malformed evaluator response: {0}")]
    Malformed(String),
}

/// Errors raised while building a session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The rules collaborator could not be created; the client cannot run without it
    #[error("Rules engine unavailable: {0}")]
    RulesUnavailable(#[from] RulesError),
}

/// Result type alias for rules operations
pub type RulesResult<T> = Result<T, RulesError>;
