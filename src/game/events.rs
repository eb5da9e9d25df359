//! Messages consumed by the game systems
//!
//! The UI never touches [`crate::game::resources::ActiveSession`] mutably; it
//! writes these messages and the systems in [`crate::game::systems`] apply
//! them during the next `Update`.

use crate::session::{Cell, PromotionPiece};
use bevy::prelude::*;

/// A board cell was clicked
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellClicked {
    pub cell: Cell,
}

/// A piece was picked in the promotion modal
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionChosen {
    pub piece: PromotionPiece,
}

/// The promotion modal was closed without a choice
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PromotionDismissed;

/// Start over; the human side comes from [`crate::core::AppConfig`]
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NewGameRequested;

/// Why an opponent cycle was asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleReason {
    SessionStart,
    HumanMoved,
    EvaluatorReady,
    /// A result arrived for a position that has since changed
    PositionChanged,
}

/// Ask for an opponent cycle; requests are coalesced while one is running
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentCycleRequested {
    pub reason: CycleReason,
}
