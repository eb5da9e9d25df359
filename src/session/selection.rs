//! Click selection state
//!
//! Holds at most one source cell together with the legal moves starting on
//! it. The destination set is refreshed from the rules engine every time a
//! piece is selected and dropped with the selection.

use super::error::RulesError;
use super::rules::{AppliedMove, LegalMove};
use super::types::Cell;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    source: Option<Cell>,
    moves: Vec<LegalMove>,
}

impl Selection {
    pub fn select(&mut self, source: Cell, moves: Vec<LegalMove>) {
        self.source = Some(source);
        self.moves = moves;
    }

    pub fn clear(&mut self) {
        self.source = None;
        self.moves.clear();
    }

    pub fn is_active(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<Cell> {
        self.source
    }

    /// Legal destinations of the selected piece
    pub fn destinations(&self) -> impl Iterator<Item = Cell> + '_ {
        self.moves.iter().map(|m| m.to)
    }

    /// The legal move landing on `target`, if the selected piece has one
    pub fn move_to(&self, target: Cell) -> Option<&LegalMove> {
        self.moves.iter().find(|m| m.to == target)
    }
}

/// What a board click did
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Not the human's turn, the game is over or a promotion is pending
    Ignored,
    /// A human piece was (re)selected
    Selected { source: Cell, destinations: usize },
    /// The selected cell was clicked again
    Deselected,
    /// The move needs a promotion piece; the modal is now open
    PromotionPending,
    /// The move was played
    MoveApplied(AppliedMove),
    /// The rules engine refused the move; the selection was dropped
    MoveRejected(RulesError),
}

impl ClickOutcome {
    /// True when the position changed and the opponent cycle should be scheduled
    pub fn moved(&self) -> bool {
        matches!(self, ClickOutcome::MoveApplied(_))
    }
}
