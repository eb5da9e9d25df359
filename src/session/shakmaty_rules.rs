//! Rules collaborator backed by the `shakmaty` crate
//!
//! shakmaty covers move generation, check, mate, stalemate and insufficient
//! material. It is stateless about history, so this adapter keeps the list of
//! position keys seen since the start to answer threefold repetition, and
//! reads the halfmove clock for the fifty-move rule.

use super::error::{RulesError, RulesResult};
use super::rules::{AppliedMove, LegalMove, MoveFlags, MoveRequest, RulesEngine};
use super::types::{BoardPiece, Cell, File, PieceKind, PromotionPiece, Rank, Side};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Position, Role, Square};

/// Halfmove clock value at which the fifty-move rule applies
const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// shakmaty-backed [`RulesEngine`]
#[derive(Debug, Clone)]
pub struct ShakmatyRules {
    start: Chess,
    position: Chess,
    /// Repetition keys of every position reached, current one last
    history: Vec<String>,
}

impl Default for ShakmatyRules {
    fn default() -> Self {
        Self::from_position(Chess::default())
    }
}

impl ShakmatyRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a custom position; an unparsable or illegal FEN is an error
    pub fn from_fen(fen: &str) -> RulesResult<Self> {
        let parsed: Fen = fen.parse().map_err(|e| RulesError::InvalidPosition {
            fen: fen.to_string(),
            message: format!("{}", e),
        })?;
        let position: Chess =
            parsed
                .into_position(CastlingMode::Standard)
                .map_err(|e| RulesError::InvalidPosition {
                    fen: fen.to_string(),
                    message: format!("{}", e),
                })?;
        Ok(Self::from_position(position))
    }

    fn from_position(position: Chess) -> Self {
        let key = repetition_key(&position);
        Self {
            start: position.clone(),
            position,
            history: vec![key],
        }
    }

    fn to_legal_move(&self, m: &Move) -> Option<LegalMove> {
        // Promotions are listed once, under the queen entry
        if matches!(m.promotion(), Some(role) if role != Role::Queen) {
            return None;
        }
        let from = cell_from_square(m.from()?)?;
        Some(LegalMove {
            from,
            to: destination_cell(m)?,
            piece: kind_from_role(m.role()),
            flags: MoveFlags {
                capture: m.is_capture(),
                castle: m.is_castle(),
                promotion: m.is_promotion(),
                en_passant: m.is_en_passant(),
            },
        })
    }

    fn halfmoves(&self) -> u32 {
        self.position.halfmoves()
    }
}

impl RulesEngine for ShakmatyRules {
    fn turn(&self) -> Side {
        side_from_color(self.position.turn())
    }

    fn piece_at(&self, cell: Cell) -> Option<BoardPiece> {
        self.position
            .board()
            .piece_at(square_from_cell(cell))
            .map(|piece| BoardPiece::new(side_from_color(piece.color), kind_from_role(piece.role)))
    }

    fn legal_moves_from(&self, from: Cell) -> Vec<LegalMove> {
        self.legal_moves()
            .into_iter()
            .filter(|m| m.from == from)
            .collect()
    }

    fn legal_moves(&self) -> Vec<LegalMove> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.position
            .legal_moves()
            .iter()
            .filter_map(|m| self.to_legal_move(m))
            .collect()
    }

    fn submit(&mut self, request: MoveRequest) -> RulesResult<AppliedMove> {
        if self.is_game_over() {
            return Err(RulesError::GameOver);
        }

        let MoveRequest { from, to, promotion } = request;
        let candidates: Vec<Move> = self
            .position
            .legal_moves()
            .iter()
            .filter(|m| m.from().and_then(cell_from_square) == Some(from))
            .filter(|m| destination_cell(m) == Some(to))
            .cloned()
            .collect();

        if candidates.is_empty() {
            return Err(RulesError::IllegalMove { from, to });
        }

        let chosen = if candidates.iter().any(|m| m.is_promotion()) {
            let piece = promotion.ok_or(RulesError::PromotionRequired { from, to })?;
            candidates
                .into_iter()
                .find(|m| m.promotion() == Some(role_from_promotion(piece)))
                .ok_or(RulesError::IllegalMove { from, to })?
        } else {
            candidates
                .into_iter()
                .next()
                .ok_or(RulesError::IllegalMove { from, to })?
        };

        let applied = AppliedMove {
            side: self.turn(),
            from,
            to,
            piece: kind_from_role(chosen.role()),
            promotion: chosen.promotion().and_then(promotion_from_role),
            flags: MoveFlags {
                capture: chosen.is_capture(),
                castle: chosen.is_castle(),
                promotion: chosen.is_promotion(),
                en_passant: chosen.is_en_passant(),
            },
        };

        self.position.play_unchecked(&chosen);
        self.history.push(repetition_key(&self.position));
        Ok(applied)
    }

    fn is_check(&self) -> bool {
        self.position.is_check()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    fn is_threefold_repetition(&self) -> bool {
        let Some(current) = self.history.last() else {
            return false;
        };
        self.history.iter().filter(|key| *key == current).count() >= 3
    }

    fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    fn is_draw(&self) -> bool {
        self.halfmoves() >= FIFTY_MOVE_HALFMOVES
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
    }

    fn position_id(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    fn reset(&mut self) {
        self.position = self.start.clone();
        self.history.clear();
        self.history.push(repetition_key(&self.position));
    }
}

/// Board, side to move, castling rights and en passant square: the FEN fields
/// that decide whether two positions repeat
fn repetition_key(position: &Chess) -> String {
    let fen = Fen::from_position(position.clone(), EnPassantMode::Legal).to_string();
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

/// Where the moving piece lands; for castling this is the king's destination
fn destination_cell(m: &Move) -> Option<Cell> {
    match m {
        Move::Castle { king, rook } => {
            let file = if rook.file().char() > king.file().char() { 'g' } else { 'c' };
            Some(Cell::from_parts(
                File::from_char(file)?,
                Rank::from_number(king.rank().char().to_digit(10)? as u8)?,
            ))
        }
        _ => cell_from_square(m.to()),
    }
}

fn cell_from_square(square: Square) -> Option<Cell> {
    Some(Cell::from_parts(
        File::from_char(square.file().char())?,
        Rank::from_number(square.rank().char().to_digit(10)? as u8)?,
    ))
}

fn square_from_cell(cell: Cell) -> Square {
    Square::from_coords(
        shakmaty::File::new(u32::from(cell.file.index())),
        shakmaty::Rank::new(u32::from(cell.rank.index())),
    )
}

fn side_from_color(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

fn kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::King => PieceKind::King,
        Role::Queen => PieceKind::Queen,
        Role::Rook => PieceKind::Rook,
        Role::Bishop => PieceKind::Bishop,
        Role::Knight => PieceKind::Knight,
        Role::Pawn => PieceKind::Pawn,
    }
}

fn role_from_promotion(piece: PromotionPiece) -> Role {
    match piece {
        PromotionPiece::Queen => Role::Queen,
        PromotionPiece::Rook => Role::Rook,
        PromotionPiece::Bishop => Role::Bishop,
        PromotionPiece::Knight => Role::Knight,
    }
}

fn promotion_from_role(role: Role) -> Option<PromotionPiece> {
    match role {
        Role::Queen => Some(PromotionPiece::Queen),
        Role::Rook => Some(PromotionPiece::Rook),
        Role::Bishop => Some(PromotionPiece::Bishop),
        Role::Knight => Some(PromotionPiece::Knight),
        Role::King | Role::Pawn => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Cell {
        Cell::from_algebraic(s).unwrap()
    }

    fn play(rules: &mut ShakmatyRules, moves: &[&str]) {
        for m in moves {
            let request = MoveRequest::new(cell(&m[0..2]), cell(&m[2..4]));
            rules.submit(request).unwrap_or_else(|e| panic!("{} rejected: {}", m, e));
        }
    }

    #[test]
    fn test_starting_position() {
        let rules = ShakmatyRules::new();
        assert_eq!(rules.turn(), Side::White);
        assert_eq!(rules.legal_moves().len(), 20);
        assert_eq!(
            rules.piece_at(cell("e1")),
            Some(BoardPiece::new(Side::White, PieceKind::King))
        );
        assert_eq!(rules.piece_at(cell("e4")), None);
        assert_eq!(
            rules.position_id(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
    }

    #[test]
    fn test_legal_destinations_for_knight() {
        let rules = ShakmatyRules::new();
        let mut targets: Vec<String> = rules
            .legal_moves_from(cell("g1"))
            .iter()
            .map(|m| m.to.to_string())
            .collect();
        targets.sort();
        assert_eq!(targets, vec!["f3", "h3"]);
    }

    #[test]
    fn test_submit_flips_turn_and_rejects_illegal() {
        let mut rules = ShakmatyRules::new();
        let applied = rules
            .submit(MoveRequest::new(cell("e2"), cell("e4")))
            .unwrap();
        assert_eq!(applied.coordinate_notation(), "e2e4");
        assert_eq!(rules.turn(), Side::Black);

        let before = rules.position_id();
        let err = rules
            .submit(MoveRequest::new(cell("e7"), cell("e3")))
            .unwrap_err();
        assert_eq!(err, RulesError::IllegalMove { from: cell("e7"), to: cell("e3") });
        assert_eq!(rules.position_id(), before);
    }

    #[test]
    fn test_castling_uses_king_destination() {
        let mut rules = ShakmatyRules::new();
        play(&mut rules, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);
        let castle = rules
            .legal_moves_from(cell("e1"))
            .into_iter()
            .find(|m| m.flags.castle)
            .expect("kingside castling available");
        assert_eq!(castle.to, cell("g1"));

        rules.submit(MoveRequest::new(cell("e1"), cell("g1"))).unwrap();
        assert_eq!(
            rules.piece_at(cell("g1")),
            Some(BoardPiece::new(Side::White, PieceKind::King))
        );
        assert_eq!(
            rules.piece_at(cell("f1")),
            Some(BoardPiece::new(Side::White, PieceKind::Rook))
        );
    }

    #[test]
    fn test_promotion_requires_piece() {
        let mut rules = ShakmatyRules::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
        let promo: Vec<LegalMove> = rules.legal_moves_from(cell("e7"));
        assert_eq!(promo.len(), 1);
        assert!(promo[0].flags.promotion);

        let err = rules
            .submit(MoveRequest::new(cell("e7"), cell("e8")))
            .unwrap_err();
        assert_eq!(err, RulesError::PromotionRequired { from: cell("e7"), to: cell("e8") });

        let applied = rules
            .submit(MoveRequest::new(cell("e7"), cell("e8")).with_promotion(PromotionPiece::Knight))
            .unwrap();
        assert_eq!(applied.promotion, Some(PromotionPiece::Knight));
        assert_eq!(
            rules.piece_at(cell("e8")),
            Some(BoardPiece::new(Side::White, PieceKind::Knight))
        );
    }

    #[test]
    fn test_promotion_letter_ignored_for_quiet_move() {
        let mut rules = ShakmatyRules::new();
        let applied = rules
            .submit(MoveRequest::new(cell("e2"), cell("e4")).with_promotion(PromotionPiece::Queen))
            .unwrap();
        assert_eq!(applied.promotion, None);
    }

    #[test]
    fn test_fools_mate_is_checkmate() {
        let mut rules = ShakmatyRules::new();
        play(&mut rules, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert!(rules.is_check());
        assert!(rules.is_checkmate());
        assert!(rules.is_game_over());
        assert!(!rules.is_draw());
        assert!(rules.legal_moves().is_empty());
        assert_eq!(
            rules.submit(MoveRequest::new(cell("a2"), cell("a3"))),
            Err(RulesError::GameOver)
        );
    }

    #[test]
    fn test_threefold_repetition() {
        let mut rules = ShakmatyRules::new();
        play(
            &mut rules,
            &["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"],
        );
        assert!(rules.is_threefold_repetition());
        assert!(rules.is_draw());
        assert!(rules.is_game_over());
    }

    #[test]
    fn test_insufficient_material_and_stalemate() {
        let bare_kings = ShakmatyRules::from_fen("8/8/8/4k3/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(bare_kings.is_insufficient_material());
        assert!(bare_kings.is_draw());

        let stalemate = ShakmatyRules::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(stalemate.is_stalemate());
        assert!(!stalemate.is_checkmate());
        assert!(stalemate.is_game_over());
    }

    #[test]
    fn test_fifty_move_rule_counts_as_draw() {
        let rules = ShakmatyRules::from_fen("8/8/8/4k3/8/8/R7/4K3 w - - 100 80").unwrap();
        assert!(!rules.is_stalemate());
        assert!(!rules.is_insufficient_material());
        assert!(!rules.is_threefold_repetition());
        assert!(rules.is_draw());
    }

    #[test]
    fn test_reset_restores_start() {
        let mut rules = ShakmatyRules::new();
        play(&mut rules, &["d2d4", "d7d5"]);
        rules.reset();
        assert_eq!(rules.turn(), Side::White);
        assert_eq!(rules.legal_moves().len(), 20);
        assert!(!rules.is_threefold_repetition());
    }

    #[test]
    fn test_invalid_fen_is_rejected() {
        assert!(matches!(
            ShakmatyRules::from_fen("not a fen"),
            Err(RulesError::InvalidPosition { .. })
        ));
    }
}
