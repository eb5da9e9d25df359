//! Game session core
//!
//! Everything that decides what a click or an evaluation does lives here,
//! free of any Bevy types so it can be driven directly from tests. The Bevy
//! layer in [`crate::game`] owns a [`GameSession`] as a resource and feeds it
//! messages.
//!
//! # Lifecycle
//!
//! 1. [`GameSession::click`] runs the selection controller and, for pawn moves
//!    onto the last rank, opens the promotion gate
//! 2. [`GameSession::choose_promotion`] / [`GameSession::dismiss_promotion`]
//!    close the gate
//! 3. [`GameSession::begin_evaluation`] starts an opponent cycle and
//!    [`GameSession::complete_evaluation`] applies its result
//! 4. [`GameSession::new_game`] resets everything and bumps the [`SessionId`]

pub mod board;
pub mod error;
pub mod evaluator;
pub mod opponent;
pub mod promotion;
pub mod rules;
pub mod selection;
pub mod shakmaty_rules;
pub mod status;
pub mod types;

pub use board::{BoardView, CellMarks, CellView, LastMove};
pub use error::{EvaluatorError, RulesError, RulesResult, SessionError};
#[cfg(not(target_arch = "wasm32"))]
pub use evaluator::HttpEvaluator;
pub use evaluator::{Evaluation, Evaluator};
pub use opponent::{OpponentMove, RecommendedMove};
pub use promotion::PendingPromotion;
pub use rules::{AppliedMove, LegalMove, MoveFlags, MoveRequest, RulesEngine};
pub use selection::{ClickOutcome, Selection};
pub use shakmaty_rules::ShakmatyRules;
pub use status::{EvaluationDisplay, GameStatus, Lead, ProbabilityDisplay, StatusView};
pub use types::{BoardPiece, Cell, File, PieceKind, PromotionPiece, Rank, Side};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// Generation counter, bumped on every new game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionId(u64);

impl SessionId {
    fn next(self) -> Self {
        SessionId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Work order for one evaluator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    pub session: SessionId,
    pub position_id: String,
}

/// What applying an evaluation result did
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// The result belongs to an earlier game and was dropped
    Stale,
    /// The game ended while the evaluation was running
    GameOver,
    /// Same game, but a move was played since the request; run a new cycle
    Outdated,
    /// Displays updated; `played` is set when it was the opponent's turn
    Completed { played: Option<OpponentMove> },
}

/// One game against the opponent
pub struct GameSession {
    rules: Box<dyn RulesEngine>,
    human_side: Side,
    id: SessionId,
    selection: Selection,
    pending_promotion: Option<PendingPromotion>,
    last_opponent_move: Option<String>,
    last_move: Option<LastMove>,
    evaluation: EvaluationDisplay,
    rng: StdRng,
}

impl GameSession {
    pub fn new(rules: Box<dyn RulesEngine>, human_side: Side, rng: StdRng) -> Self {
        GameSession {
            rules,
            human_side,
            id: SessionId::default(),
            selection: Selection::default(),
            pending_promotion: None,
            last_opponent_move: None,
            last_move: None,
            evaluation: EvaluationDisplay::calculating(),
            rng,
        }
    }

    /// Session on the shakmaty rules engine, optionally from a custom FEN
    pub fn standard(start_fen: Option<&str>, human_side: Side) -> Result<Self, SessionError> {
        let rules = match start_fen {
            Some(fen) => ShakmatyRules::from_fen(fen)?,
            None => ShakmatyRules::new(),
        };
        Ok(Self::new(Box::new(rules), human_side, StdRng::from_os_rng()))
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn human_side(&self) -> Side {
        self.human_side
    }

    pub fn opponent_side(&self) -> Side {
        self.human_side.opposite()
    }

    pub fn rules(&self) -> &dyn RulesEngine {
        self.rules.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    pub fn last_opponent_move(&self) -> Option<&str> {
        self.last_opponent_move.as_deref()
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn is_game_over(&self) -> bool {
        self.rules.is_game_over()
    }

    pub fn is_human_turn(&self) -> bool {
        self.rules.turn() == self.human_side
    }

    pub fn status(&self) -> StatusView {
        StatusView::present(self.rules.as_ref(), self.evaluation)
    }

    pub fn board_view(&self) -> BoardView {
        BoardView::build(
            self.rules.as_ref(),
            &self.selection,
            self.last_move,
            self.human_side,
        )
    }

    /// Start over from the initial position with `human_side` to play
    pub fn new_game(&mut self, human_side: Side) {
        self.rules.reset();
        self.human_side = human_side;
        self.id = self.id.next();
        self.selection.clear();
        self.pending_promotion = None;
        self.last_opponent_move = None;
        self.last_move = None;
        self.evaluation = EvaluationDisplay::calculating();
        tracing::info!(
            "[SESSION] New game {} (human plays {})",
            self.id,
            self.human_side
        );
    }

    /// Handle a click on a board cell
    pub fn click(&mut self, cell: Cell) -> ClickOutcome {
        if self.pending_promotion.is_some() || self.is_game_over() || !self.is_human_turn() {
            return ClickOutcome::Ignored;
        }

        let own_piece = self
            .rules
            .piece_at(cell)
            .is_some_and(|piece| piece.side == self.human_side);

        match self.selection.source() {
            Some(source) if source == cell => {
                self.selection.clear();
                ClickOutcome::Deselected
            }
            _ if own_piece => {
                let moves = self.rules.legal_moves_from(cell);
                let destinations = moves.len();
                self.selection.select(cell, moves);
                tracing::debug!("[INPUT] Selected {} ({} destinations)", cell, destinations);
                ClickOutcome::Selected {
                    source: cell,
                    destinations,
                }
            }
            None => ClickOutcome::Ignored,
            Some(source) => self.attempt_move(source, cell),
        }
    }

    fn attempt_move(&mut self, source: Cell, target: Cell) -> ClickOutcome {
        let gated = self.selection.move_to(target).is_some_and(|legal| {
            legal.flags.promotion
                || promotion::is_promotion_move(legal.piece, self.human_side, target)
        });
        self.selection.clear();

        if gated {
            self.pending_promotion = Some(PendingPromotion {
                from: source,
                to: target,
                side: self.human_side,
            });
            tracing::info!("[PROMOTION] Waiting for piece choice on {}{}", source, target);
            return ClickOutcome::PromotionPending;
        }

        self.submit_human(MoveRequest::new(source, target))
    }

    fn submit_human(&mut self, request: MoveRequest) -> ClickOutcome {
        match self.rules.submit(request) {
            Ok(applied) => {
                self.last_move = Some(LastMove {
                    from: applied.from,
                    to: applied.to,
                });
                tracing::info!("[INPUT] Played {}", applied.coordinate_notation());
                ClickOutcome::MoveApplied(applied)
            }
            Err(e) => {
                tracing::debug!("[INPUT] Move rejected: {}", e);
                ClickOutcome::MoveRejected(e)
            }
        }
    }

    /// Complete the pending promotion with `piece`
    pub fn choose_promotion(&mut self, piece: PromotionPiece) -> ClickOutcome {
        let Some(pending) = self.pending_promotion.take() else {
            return ClickOutcome::Ignored;
        };
        tracing::info!(
            "[PROMOTION] {} promotes on {} to {}",
            pending.side,
            pending.to,
            piece.name()
        );
        self.submit_human(MoveRequest::new(pending.from, pending.to).with_promotion(piece))
    }

    /// Close the promotion modal without moving; true if one was open
    pub fn dismiss_promotion(&mut self) -> bool {
        let dismissed = self.pending_promotion.take().is_some();
        if dismissed {
            tracing::debug!("[PROMOTION] Dismissed");
        }
        dismissed
    }

    /// Start an opponent cycle
    ///
    /// Returns `None` when the game is over. Otherwise both displays switch to
    /// "Calculating" and the returned request should be sent to the evaluator.
    pub fn begin_evaluation(&mut self) -> Option<EvaluationRequest> {
        if self.is_game_over() {
            return None;
        }
        self.evaluation = EvaluationDisplay::calculating();
        Some(EvaluationRequest {
            session: self.id,
            position_id: self.rules.position_id(),
        })
    }

    /// Apply an evaluator result, or its failure, to the position it was
    /// requested for
    pub fn complete_evaluation(
        &mut self,
        request: &EvaluationRequest,
        result: Result<Evaluation, EvaluatorError>,
    ) -> CycleOutcome {
        if request.session != self.id {
            tracing::debug!(
                "[OPPONENT] Dropping result for session {} (current {})",
                request.session,
                self.id
            );
            return CycleOutcome::Stale;
        }
        if self.is_game_over() {
            return CycleOutcome::GameOver;
        }
        if request.position_id != self.rules.position_id() {
            tracing::debug!("[OPPONENT] Position changed during evaluation");
            return CycleOutcome::Outdated;
        }

        let recommendation = match result {
            Ok(evaluation) => match EvaluationDisplay::from_probability(evaluation.probability) {
                Some(display) => {
                    self.evaluation = display;
                    Some(evaluation.recommended_move)
                }
                None => {
                    tracing::warn!(
                        "[OPPONENT] Ignoring evaluation with probability {}",
                        evaluation.probability
                    );
                    None
                }
            },
            Err(e) => {
                tracing::warn!("[OPPONENT] Evaluation failed: {}", e);
                None
            }
        };

        if self.is_human_turn() {
            return CycleOutcome::Completed { played: None };
        }

        let played = opponent::play_recommendation(
            self.rules.as_mut(),
            recommendation.as_deref(),
            &mut self.rng,
        );
        if let Some(opponent_move) = &played {
            let applied = opponent_move.applied();
            self.last_opponent_move = Some(applied.coordinate_notation());
            self.last_move = Some(LastMove {
                from: applied.from,
                to: applied.to,
            });
            tracing::info!("[OPPONENT] Played {}", applied.coordinate_notation());
        }
        CycleOutcome::Completed { played }
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("human_side", &self.human_side)
            .field("position", &self.rules.position_id())
            .field("selection", &self.selection)
            .field("pending_promotion", &self.pending_promotion)
            .finish()
    }
}
