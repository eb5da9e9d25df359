//! WASM-specific tests
//!
//! These tests run in a browser environment using wasm-pack test.
//! Run with: cd web && wasm-pack test --headless --chrome

use glyphboard::session::EvaluatorError;
use glyphboard_web::evaluator_bridge::{register_evaluator, take_handoff};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";

fn js_function(body: &str) -> js_sys::Function {
    js_sys::Function::new_with_args("fen", body)
}

/// The handoff can be taken once per page, so all bridge cases share one test
#[wasm_bindgen_test]
async fn test_js_evaluator_bridge() {
    let handoff = take_handoff().expect("handoff available");
    assert!(take_handoff().is_none(), "handoff is handed out once");

    // Promise resolving to an object
    register_evaluator(js_function(
        "return Promise.resolve({ probability: 0.25, move: 'e7e5' });",
    ));
    // Plain JSON string
    register_evaluator(js_function(
        "return JSON.stringify({ probability: 0.5, move: 'd7d5' });",
    ));
    // Page-side failure
    register_evaluator(js_function("throw new Error('model not loaded');"));
    // Missing fields
    register_evaluator(js_function("return { move: 'e7e5' };"));

    let evaluators: Vec<_> = handoff.try_iter().collect();
    assert_eq!(evaluators.len(), 4);
    assert_eq!(evaluators[0].name(), "javascript");

    let first = evaluators[0].evaluate(AFTER_E4).await.expect("evaluation");
    assert_eq!(first.probability, 0.25);
    assert_eq!(first.recommended_move, "e7e5");

    let second = evaluators[1].evaluate(AFTER_E4).await.expect("evaluation");
    assert_eq!(second.recommended_move, "d7d5");

    assert!(matches!(
        evaluators[2].evaluate(AFTER_E4).await,
        Err(EvaluatorError::Transport(_))
    ));
    assert!(matches!(
        evaluators[3].evaluate(AFTER_E4).await,
        Err(EvaluatorError::Malformed(_))
    ));
}

#[wasm_bindgen_test]
fn test_window_exists() {
    let window = web_sys::window();
    assert!(window.is_some(), "Window should exist in browser context");
}

#[wasm_bindgen_test]
fn test_random_generation() {
    let mut buf = [0u8; 32];
    getrandom::fill(&mut buf).expect("getrandom should work in WASM");
    assert!(buf.iter().any(|&b| b != 0), "Random bytes should not be all zeros");
}
