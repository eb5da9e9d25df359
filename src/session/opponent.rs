//! Opponent mover
//!
//! Applies the evaluator's recommended move for the opponent, or a uniformly
//! random legal move when there is no usable recommendation.

use super::rules::{AppliedMove, MoveRequest, RulesEngine};
use super::types::{Cell, PromotionPiece};
use rand::rngs::StdRng;
use rand::Rng;

/// A recommended move parsed from coordinate notation ("e7e5", "b2b1q")
///
/// The promotion letter is kept raw; a letter that names no piece is still
/// "present" and makes the move eligible for the queen retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendedMove {
    pub from: Cell,
    pub to: Cell,
    pub promotion: Option<char>,
}

impl RecommendedMove {
    /// Parse at least four characters: source cell, destination cell and an
    /// optional promotion letter
    pub fn parse(notation: &str) -> Option<Self> {
        let chars: Vec<char> = notation.trim().chars().collect();
        if chars.len() < 4 {
            return None;
        }
        let from = Cell::from_algebraic(&chars[0..2].iter().collect::<String>())?;
        let to = Cell::from_algebraic(&chars[2..4].iter().collect::<String>())?;
        Some(RecommendedMove {
            from,
            to,
            promotion: chars.get(4).copied(),
        })
    }

    fn request(&self) -> MoveRequest {
        let request = MoveRequest::new(self.from, self.to);
        match self.promotion.and_then(PromotionPiece::from_letter) {
            Some(piece) => request.with_promotion(piece),
            None => request,
        }
    }
}

/// How the opponent's move was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentMove {
    /// The recommendation was played as given
    Recommended(AppliedMove),
    /// The recommendation only went through as a queen promotion
    RetriedAsQueen(AppliedMove),
    /// No usable recommendation; a random legal move was played
    Random(AppliedMove),
}

impl OpponentMove {
    pub fn applied(&self) -> &AppliedMove {
        match self {
            OpponentMove::Recommended(m)
            | OpponentMove::RetriedAsQueen(m)
            | OpponentMove::Random(m) => m,
        }
    }
}

/// Play the recommendation, retrying once as a queen promotion, then fall
/// back to a random move
///
/// Returns `None` only when the side to move has no legal move at all.
pub fn play_recommendation(
    rules: &mut dyn RulesEngine,
    recommendation: Option<&str>,
    rng: &mut StdRng,
) -> Option<OpponentMove> {
    let Some(notation) = recommendation else {
        return random_move(rules, rng).map(OpponentMove::Random);
    };

    let Some(parsed) = RecommendedMove::parse(notation) else {
        tracing::warn!("[OPPONENT] Unparseable recommendation '{}'", notation);
        return random_move(rules, rng).map(OpponentMove::Random);
    };

    match rules.submit(parsed.request()) {
        Ok(applied) => return Some(OpponentMove::Recommended(applied)),
        Err(e) => tracing::debug!("[OPPONENT] Recommendation {} rejected: {}", notation, e),
    }

    if parsed.promotion.is_some() {
        let retry = MoveRequest::new(parsed.from, parsed.to).with_promotion(PromotionPiece::Queen);
        match rules.submit(retry) {
            Ok(applied) => return Some(OpponentMove::RetriedAsQueen(applied)),
            Err(e) => tracing::debug!("[OPPONENT] Queen retry of {} rejected: {}", notation, e),
        }
    }

    tracing::warn!(
        "[OPPONENT] Recommendation '{}' not applicable, playing a random move",
        notation
    );
    random_move(rules, rng).map(OpponentMove::Random)
}

/// Play a uniformly random legal move, promoting to a queen where needed
pub fn random_move(rules: &mut dyn RulesEngine, rng: &mut StdRng) -> Option<AppliedMove> {
    let moves = rules.legal_moves();
    if moves.is_empty() {
        return None;
    }
    let chosen = moves[rng.random_range(0..moves.len())];
    let mut request = MoveRequest::new(chosen.from, chosen.to);
    if chosen.flags.promotion {
        request = request.with_promotion(PromotionPiece::Queen);
    }
    match rules.submit(request) {
        Ok(applied) => Some(applied),
        Err(e) => {
            tracing::error!("[OPPONENT] Legal move {}{} refused: {}", chosen.from, chosen.to, e);
            None
        }
    }
}
