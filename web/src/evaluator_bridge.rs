//! JavaScript evaluator bridge
//!
//! The page registers an async function `(fen) => ({ probability, move })`
//! once its model is ready. JS values cannot leave the main thread, so the
//! function stays inside a local task and the [`JsEvaluator`] handed to Bevy
//! only holds a channel to it.
//!
//! ```js
//! import init, { register_evaluator } from "./glyphboard_web.js";
//! await init();
//! register_evaluator(async (fen) => model.evaluate(fen));
//! ```

use async_trait::async_trait;
use futures::channel::{mpsc, oneshot};
use futures::StreamExt;
use glyphboard::game::resources::{evaluator_channel, EvaluatorHandoff, EvaluatorSender};
use glyphboard::session::evaluator::parse_evaluation;
use glyphboard::session::{Evaluation, Evaluator, EvaluatorError};
use std::cell::RefCell;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

type Reply = oneshot::Sender<Result<Evaluation, EvaluatorError>>;

thread_local! {
    // Created on first use so registrations made before the app starts are queued
    static CHANNEL: (EvaluatorSender, RefCell<Option<EvaluatorHandoff>>) = {
        let (sender, handoff) = evaluator_channel();
        (sender, RefCell::new(Some(handoff)))
    };
}

/// The receiving half for the Bevy app; `None` after the first call
pub fn take_handoff() -> Option<EvaluatorHandoff> {
    CHANNEL.with(|(_, handoff)| handoff.borrow_mut().take())
}

/// Install `evaluate` as the opponent's evaluator
///
/// Calling it again replaces the previous evaluator.
#[wasm_bindgen]
pub fn register_evaluator(evaluate: js_sys::Function) {
    let (requests, mut incoming) = mpsc::unbounded::<(String, Reply)>();

    wasm_bindgen_futures::spawn_local(async move {
        while let Some((fen, reply)) = incoming.next().await {
            let _ = reply.send(call_js(&evaluate, &fen).await);
        }
    });

    let installed = CHANNEL.with(|(sender, _)| sender.install(Arc::new(JsEvaluator { requests })));
    if !installed {
        web_sys::console::warn_1(&"[OPPONENT] App is gone, evaluator not installed".into());
    }
}

async fn call_js(evaluate: &js_sys::Function, fen: &str) -> Result<Evaluation, EvaluatorError> {
    let returned = evaluate
        .call1(&JsValue::NULL, &JsValue::from_str(fen))
        .map_err(|e| EvaluatorError::Transport(describe(&e)))?;

    let value = if returned.is_instance_of::<js_sys::Promise>() {
        JsFuture::from(js_sys::Promise::from(returned))
            .await
            .map_err(|e| EvaluatorError::Transport(describe(&e)))?
    } else {
        returned
    };

    // Accept either a JSON string or a plain object
    let body = match value.as_string() {
        Some(text) => text,
        None => js_sys::JSON::stringify(&value)
            .map_err(|e| EvaluatorError::Malformed(describe(&e)))?
            .into(),
    };
    parse_evaluation(&body)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Evaluator that forwards each request to the registered JS function
pub struct JsEvaluator {
    requests: mpsc::UnboundedSender<(String, Reply)>,
}

#[async_trait]
impl Evaluator for JsEvaluator {
    async fn evaluate(&self, position_id: &str) -> Result<Evaluation, EvaluatorError> {
        let (reply, answer) = oneshot::channel();
        self.requests
            .unbounded_send((position_id.to_string(), reply))
            .map_err(|_| EvaluatorError::Unavailable)?;
        answer
            .await
            .map_err(|_| EvaluatorError::Transport("JS evaluator dropped the request".to_string()))?
    }

    fn name(&self) -> &str {
        "javascript"
    }
}
