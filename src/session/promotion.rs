//! Promotion gate
//!
//! A pawn move onto its last rank is held back until the player picks a
//! piece. The pending move never reaches the rules engine before that.

use super::types::{Cell, PieceKind, Side};

/// A pawn move waiting for its promotion piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Cell,
    pub to: Cell,
    pub side: Side,
}

/// Check if a move by `piece` of `side` onto `target` promotes
pub fn is_promotion_move(piece: PieceKind, side: Side, target: Cell) -> bool {
    piece == PieceKind::Pawn && target.rank == side.last_rank()
}
