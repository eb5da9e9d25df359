//! Rules collaborator interface
//!
//! The session never decides legality or terminal status itself. Everything
//! goes through [`RulesEngine`], which is the single source of truth for the
//! position. [`crate::session::ShakmatyRules`] is the shipped implementation.

use super::error::RulesResult;
use super::types::{BoardPiece, Cell, PieceKind, PromotionPiece, Side};

/// Metadata attached to a legal move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveFlags {
    pub capture: bool,
    pub castle: bool,
    pub promotion: bool,
    pub en_passant: bool,
}

/// A legal move as reported by the rules collaborator
///
/// For castling `to` is the king's destination cell. Promotions are reported
/// once per destination with `flags.promotion` set; the piece is chosen at
/// submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub from: Cell,
    pub to: Cell,
    pub piece: PieceKind,
    pub flags: MoveFlags,
}

/// A move submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Cell,
    pub to: Cell,
    pub promotion: Option<PromotionPiece>,
}

impl MoveRequest {
    pub fn new(from: Cell, to: Cell) -> Self {
        MoveRequest {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, piece: PromotionPiece) -> Self {
        self.promotion = Some(piece);
        self
    }
}

/// A move that was accepted and played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub side: Side,
    pub from: Cell,
    pub to: Cell,
    pub piece: PieceKind,
    pub promotion: Option<PromotionPiece>,
    pub flags: MoveFlags,
}

impl AppliedMove {
    /// Coordinate notation, e.g. "e2e4" or "e7e8q"
    pub fn coordinate_notation(&self) -> String {
        let mut notation = format!("{}{}", self.from, self.to);
        if let Some(piece) = self.promotion {
            notation.push(piece.letter());
        }
        notation
    }
}

/// Rules collaborator consumed by the session
///
/// Submissions ignore `promotion` for non-promotion moves and reject promotion
/// moves submitted without one.
pub trait RulesEngine: Send + Sync + 'static {
    /// Side to move
    fn turn(&self) -> Side;

    fn piece_at(&self, cell: Cell) -> Option<BoardPiece>;

    /// Legal moves starting on `from`, one entry per destination
    fn legal_moves_from(&self, from: Cell) -> Vec<LegalMove>;

    /// Every legal move of the side to move, one entry per (from, to)
    fn legal_moves(&self) -> Vec<LegalMove>;

    fn submit(&mut self, request: MoveRequest) -> RulesResult<AppliedMove>;

    fn is_check(&self) -> bool;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    fn is_threefold_repetition(&self) -> bool;

    fn is_insufficient_material(&self) -> bool;

    /// Any draw rule, including ones without a dedicated predicate
    fn is_draw(&self) -> bool;

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    /// Position identifier handed to the evaluator (FEN)
    fn position_id(&self) -> String;

    /// Back to the starting position
    fn reset(&mut self);

    /// Occupancy snapshot indexed by [`Cell::index`]
    fn snapshot(&self) -> [Option<BoardPiece>; 64] {
        let mut cells = [None; 64];
        for cell in Cell::all() {
            cells[cell.index()] = self.piece_at(cell);
        }
        cells
    }
}
