//! Status presenter
//!
//! Turns the rules engine's predicates into the status line, the result
//! label, the active side panel and the two probability displays.

use super::rules::RulesEngine;
use super::types::Side;
use std::fmt;

/// Game state derived from the rules engine, in reporting precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing { turn: Side, in_check: bool },
    Checkmate { winner: Side },
    Stalemate,
    ThreefoldRepetition,
    InsufficientMaterial,
    /// A draw rule without its own predicate (the fifty-move rule)
    OtherDraw,
    /// The engine reports game over without naming a reason
    Over,
}

impl GameStatus {
    /// Classify the current position
    ///
    /// Terminal conditions are checked in order checkmate, stalemate,
    /// threefold repetition, insufficient material, other draw, unspecified.
    pub fn of(rules: &dyn RulesEngine) -> Self {
        let turn = rules.turn();
        if rules.is_checkmate() {
            GameStatus::Checkmate {
                winner: turn.opposite(),
            }
        } else if rules.is_stalemate() {
            GameStatus::Stalemate
        } else if rules.is_threefold_repetition() {
            GameStatus::ThreefoldRepetition
        } else if rules.is_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else if rules.is_draw() {
            GameStatus::OtherDraw
        } else if rules.is_game_over() {
            GameStatus::Over
        } else {
            GameStatus::Ongoing {
                turn,
                in_check: rules.is_check(),
            }
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing { .. })
    }

    pub fn text(self) -> String {
        match self {
            GameStatus::Ongoing {
                turn,
                in_check: false,
            } => format!("{} to move", turn),
            GameStatus::Ongoing {
                turn,
                in_check: true,
            } => format!("{} to move, {} is in check", turn, turn),
            GameStatus::Checkmate { winner } => format!("Checkmate. {} won!", winner),
            GameStatus::Stalemate => "Stalemate. The game is a draw.".to_string(),
            GameStatus::ThreefoldRepetition => "Draw by threefold repetition.".to_string(),
            GameStatus::InsufficientMaterial => "Draw by insufficient material.".to_string(),
            GameStatus::OtherDraw => "Draw by the fifty-move rule.".to_string(),
            GameStatus::Over => "Game over.".to_string(),
        }
    }

    /// Result label shown on the board ("White won", "Draw")
    pub fn label(self) -> Option<String> {
        match self {
            GameStatus::Checkmate { winner } => Some(format!("{} won", winner)),
            GameStatus::Stalemate
            | GameStatus::ThreefoldRepetition
            | GameStatus::InsufficientMaterial
            | GameStatus::OtherDraw => Some("Draw".to_string()),
            GameStatus::Ongoing { .. } | GameStatus::Over => None,
        }
    }

    /// The side panel to highlight; none once the game is over
    pub fn active_side(self) -> Option<Side> {
        match self {
            GameStatus::Ongoing { turn, .. } => Some(turn),
            _ => None,
        }
    }
}

/// One side panel's probability readout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbabilityDisplay {
    #[default]
    Calculating,
    Percent(u8),
    NotApplicable,
}

impl fmt::Display for ProbabilityDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbabilityDisplay::Calculating => f.write_str("Calculating..."),
            ProbabilityDisplay::Percent(n) => write!(f, "{}%", n),
            ProbabilityDisplay::NotApplicable => f.write_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lead {
    Human,
    Balanced,
    Opponent,
}

impl Lead {
    pub fn label(self) -> &'static str {
        match self {
            Lead::Human => "You lead",
            Lead::Balanced => "Balanced",
            Lead::Opponent => "Opponent leads",
        }
    }
}

/// Both probability displays plus the lead indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvaluationDisplay {
    pub human: ProbabilityDisplay,
    pub opponent: ProbabilityDisplay,
    pub lead: Option<Lead>,
}

impl EvaluationDisplay {
    pub fn calculating() -> Self {
        Self::default()
    }

    pub fn not_applicable() -> Self {
        EvaluationDisplay {
            human: ProbabilityDisplay::NotApplicable,
            opponent: ProbabilityDisplay::NotApplicable,
            lead: None,
        }
    }

    /// Displays for a human win probability; `None` if `p` is not finite
    pub fn from_probability(p: f64) -> Option<Self> {
        let (human, opponent) = probability_pair(p)?;
        let lead = match human.cmp(&50) {
            std::cmp::Ordering::Greater => Lead::Human,
            std::cmp::Ordering::Equal => Lead::Balanced,
            std::cmp::Ordering::Less => Lead::Opponent,
        };
        Some(EvaluationDisplay {
            human: ProbabilityDisplay::Percent(human),
            opponent: ProbabilityDisplay::Percent(opponent),
            lead: Some(lead),
        })
    }
}

/// Split a probability into whole percentages summing to 100
pub fn probability_pair(p: f64) -> Option<(u8, u8)> {
    if !p.is_finite() {
        return None;
    }
    let human = (p.clamp(0.0, 1.0) * 100.0).round() as u8;
    Some((human, 100 - human))
}

/// Everything the status line and side panels show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub status: GameStatus,
    pub text: String,
    pub label: Option<String>,
    pub active_side: Option<Side>,
    pub evaluation: EvaluationDisplay,
}

impl StatusView {
    /// Present the position; terminal states override the evaluation with N/A
    pub fn present(rules: &dyn RulesEngine, evaluation: EvaluationDisplay) -> Self {
        let status = GameStatus::of(rules);
        let evaluation = if status.is_terminal() {
            EvaluationDisplay::not_applicable()
        } else {
            evaluation
        };
        StatusView {
            status,
            text: status.text(),
            label: status.label(),
            active_side: status.active_side(),
            evaluation,
        }
    }
}
