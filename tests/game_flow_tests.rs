//! Game Flow Integration Tests
//!
//! Drives a headless app (`MinimalPlugins` + `GamePlugin`) through full
//! flows by writing the messages the UI would write:
//! - Human move and random opponent reply
//! - Promotion through the modal
//! - Checkmate and the terminal displays
//! - New game during a running evaluation

use async_trait::async_trait;
use bevy::prelude::*;
use glyphboard::core::AppConfig;
use glyphboard::game::events::{CellClicked, NewGameRequested, PromotionChosen, PromotionDismissed};
use glyphboard::game::resources::{evaluator_channel, ActiveSession, OpponentCycle};
use glyphboard::game::GamePlugin;
use glyphboard::session::{
    BoardPiece, Cell, Evaluation, Evaluator, EvaluatorError, GameSession, GameStatus, Lead,
    PieceKind, ProbabilityDisplay, PromotionPiece, ShakmatyRules, Side,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const START_BOARD: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

fn cell(s: &str) -> Cell {
    Cell::from_algebraic(s).unwrap()
}

fn session_from(fen: Option<&str>, human: Side) -> GameSession {
    let rules = match fen {
        Some(fen) => ShakmatyRules::from_fen(fen).unwrap(),
        None => ShakmatyRules::new(),
    };
    GameSession::new(Box::new(rules), human, StdRng::seed_from_u64(7))
}

/// Headless app with no opponent delay
fn test_app(session: GameSession) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(AppConfig {
        opponent_delay_ms: 0,
        ..default()
    });
    app.insert_resource(ActiveSession(session));
    app.add_plugins(GamePlugin);
    // Startup: opening cycle
    app.update();
    app
}

fn play(app: &mut App, from: &str, to: &str) {
    app.world_mut().write_message(CellClicked { cell: cell(from) });
    app.world_mut().write_message(CellClicked { cell: cell(to) });
    app.update();
}

/// Update until the opponent cycle is idle again
fn settle(app: &mut App) {
    for _ in 0..500 {
        app.update();
        if app.world().resource::<OpponentCycle>().is_idle() {
            return;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    panic!("opponent cycle never settled");
}

fn session(app: &App) -> &GameSession {
    &app.world().resource::<ActiveSession>().0
}

fn board_of(app: &App) -> String {
    session(app)
        .rules()
        .position_id()
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Replies from a table keyed by the board part of the FEN
struct ScriptedEvaluator {
    probability: f64,
    replies: HashMap<&'static str, &'static str>,
    calls: Mutex<usize>,
}

impl ScriptedEvaluator {
    fn new(probability: f64, replies: &[(&'static str, &'static str)]) -> Self {
        Self {
            probability,
            replies: replies.iter().copied().collect(),
            calls: Mutex::new(0),
        }
    }
}

#[async_trait]
impl Evaluator for ScriptedEvaluator {
    async fn evaluate(&self, position_id: &str) -> Result<Evaluation, EvaluatorError> {
        *self.calls.lock().unwrap() += 1;
        let board = position_id.split(' ').next().unwrap_or_default();
        Ok(Evaluation {
            probability: self.probability,
            recommended_move: self.replies.get(board).copied().unwrap_or("0000").to_string(),
        })
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

// ============================================================================
// Human Move and Random Reply
// ============================================================================

#[test]
fn test_e2e4_gets_random_reply_without_evaluator() {
    let mut app = test_app(session_from(None, Side::White));
    assert_eq!(board_of(&app), START_BOARD);

    play(&mut app, "e2", "e4");
    settle(&mut app);

    let session = session(&app);
    assert_eq!(
        session.rules().piece_at(cell("e4")),
        Some(BoardPiece::new(Side::White, PieceKind::Pawn))
    );
    assert!(session.is_human_turn(), "opponent replied, human to move");
    assert!(session.last_opponent_move().is_some());
}

#[test]
fn test_opponent_opens_when_human_plays_black() {
    let mut app = test_app(session_from(None, Side::Black));
    settle(&mut app);

    let session = session(&app);
    assert_eq!(session.rules().turn(), Side::Black);
    assert!(session.last_opponent_move().is_some());
}

// ============================================================================
// Promotion
// ============================================================================

#[test]
fn test_promotion_to_rook() {
    let mut app = test_app(session_from(Some("7k/P7/8/8/8/8/8/4K3 w - - 0 1"), Side::White));

    play(&mut app, "a7", "a8");
    assert!(session(&app).pending_promotion().is_some());
    assert_eq!(session(&app).rules().turn(), Side::White, "nothing moved yet");

    app.world_mut().write_message(PromotionChosen {
        piece: PromotionPiece::Rook,
    });
    app.update();
    settle(&mut app);

    let session = session(&app);
    assert!(session.pending_promotion().is_none());
    assert_eq!(
        session.rules().piece_at(cell("a8")),
        Some(BoardPiece::new(Side::White, PieceKind::Rook))
    );
    assert!(session.is_human_turn());
}

#[test]
fn test_promotion_dismissed_keeps_position() {
    let fen = "7k/P7/8/8/8/8/8/4K3 w - - 0 1";
    let mut app = test_app(session_from(Some(fen), Side::White));

    play(&mut app, "a7", "a8");
    app.world_mut().write_message(PromotionDismissed);
    app.update();

    let session = session(&app);
    assert!(session.pending_promotion().is_none());
    assert_eq!(session.rules().position_id(), fen);
}

// ============================================================================
// Evaluator Handoff
// ============================================================================

#[test]
fn test_evaluator_from_handoff_drives_displays_and_replies() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(AppConfig {
        opponent_delay_ms: 0,
        ..default()
    });
    app.insert_resource(ActiveSession(session_from(None, Side::White)));

    let (sender, handoff) = evaluator_channel();
    let evaluator = Arc::new(ScriptedEvaluator::new(
        0.7,
        &[("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR", "c7c5")],
    ));
    assert!(sender.install(evaluator.clone()));
    app.insert_resource(handoff);
    app.add_plugins(GamePlugin);

    settle(&mut app);
    let status = session(&app).status();
    assert_eq!(status.evaluation.human, ProbabilityDisplay::Percent(70));
    assert_eq!(status.evaluation.opponent, ProbabilityDisplay::Percent(30));
    assert_eq!(status.evaluation.lead, Some(Lead::Human));

    play(&mut app, "e2", "e4");
    settle(&mut app);

    assert_eq!(session(&app).last_opponent_move(), Some("c7c5"));
    assert!(*evaluator.calls.lock().unwrap() >= 2);
}

#[test]
fn test_fools_mate_ends_with_not_applicable_displays() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(AppConfig {
        opponent_delay_ms: 0,
        ..default()
    });
    app.insert_resource(ActiveSession(session_from(None, Side::White)));

    let (sender, handoff) = evaluator_channel();
    sender.install(Arc::new(ScriptedEvaluator::new(
        0.5,
        &[
            ("rnbqkbnr/pppppppp/8/8/8/5P2/PPPPP1PP/RNBQKBNR", "e7e5"),
            ("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR", "d8h4"),
        ],
    )));
    app.insert_resource(handoff);
    app.add_plugins(GamePlugin);
    settle(&mut app);

    play(&mut app, "f2", "f3");
    settle(&mut app);
    play(&mut app, "g2", "g4");
    settle(&mut app);

    let status = session(&app).status();
    assert_eq!(
        status.status,
        GameStatus::Checkmate {
            winner: Side::Black
        }
    );
    assert_eq!(status.text, "Checkmate. Black won!");
    assert_eq!(status.evaluation.human, ProbabilityDisplay::NotApplicable);
    assert_eq!(status.evaluation.opponent, ProbabilityDisplay::NotApplicable);

    // No further moves are accepted
    let before = session(&app).rules().position_id();
    play(&mut app, "e2", "e4");
    assert_eq!(session(&app).rules().position_id(), before);
}

// ============================================================================
// New Game
// ============================================================================

/// Holds every answer until the test opens the gate
struct GatedEvaluator {
    open: Arc<Mutex<bool>>,
}

#[async_trait]
impl Evaluator for GatedEvaluator {
    async fn evaluate(&self, _position_id: &str) -> Result<Evaluation, EvaluatorError> {
        while !*self.open.lock().unwrap() {
            std::thread::sleep(Duration::from_millis(1));
        }
        Ok(Evaluation {
            probability: 0.5,
            recommended_move: "e7e5".to_string(),
        })
    }
}

#[test]
fn test_new_game_drops_running_evaluation() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(AppConfig {
        opponent_delay_ms: 0,
        ..default()
    });
    app.insert_resource(ActiveSession(session_from(None, Side::White)));

    let open = Arc::new(Mutex::new(true));
    let (sender, handoff) = evaluator_channel();
    sender.install(Arc::new(GatedEvaluator { open: open.clone() }));
    app.insert_resource(handoff);
    app.add_plugins(GamePlugin);
    settle(&mut app);

    *open.lock().unwrap() = false;
    play(&mut app, "e2", "e4");
    assert!(matches!(
        *app.world().resource::<OpponentCycle>(),
        OpponentCycle::Evaluating { .. }
    ));
    let first_id = session(&app).id();

    app.world_mut().write_message(NewGameRequested);
    app.update();
    *open.lock().unwrap() = true;
    settle(&mut app);

    let session = session(&app);
    assert_ne!(session.id(), first_id);
    assert_eq!(board_of(&app), START_BOARD);
    assert!(session.last_opponent_move().is_none());
    assert!(session.is_human_turn());
}

#[test]
fn test_rerun_after_move_during_evaluation_waits_delay() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(AppConfig {
        opponent_delay_ms: 60_000,
        ..default()
    });
    app.insert_resource(ActiveSession(session_from(None, Side::White)));

    let open = Arc::new(Mutex::new(false));
    let (sender, handoff) = evaluator_channel();
    sender.install(Arc::new(GatedEvaluator { open: open.clone() }));
    app.insert_resource(handoff);
    app.add_plugins(GamePlugin);

    // Opening evaluation starts without delay and is held at the gate
    app.update();
    assert!(matches!(
        *app.world().resource::<OpponentCycle>(),
        OpponentCycle::Evaluating { .. }
    ));

    // The human moves meanwhile; the request is folded into the running cycle
    play(&mut app, "e2", "e4");
    *open.lock().unwrap() = true;

    let mut waiting = false;
    for _ in 0..500 {
        app.update();
        if matches!(
            *app.world().resource::<OpponentCycle>(),
            OpponentCycle::Waiting(_)
        ) {
            waiting = true;
            break;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    assert!(waiting, "outdated result reschedules behind the delay");

    app.update();
    let session = session(&app);
    assert_eq!(session.rules().turn(), Side::Black);
    assert!(session.last_opponent_move().is_none());
}
