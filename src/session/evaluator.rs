//! Evaluation collaborator
//!
//! An evaluator answers a position identifier (FEN) with the human side's win
//! probability and a recommended move in coordinate notation. It is optional:
//! when none is installed, or it fails, the opponent plays a random move.

use super::error::EvaluatorError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Evaluator response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Win probability for the human side, expected in [0, 1]
    pub probability: f64,
    /// Recommended opponent move, e.g. "e7e5" or "b2b1q"
    #[serde(rename = "move")]
    pub recommended_move: String,
}

#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(&self, position_id: &str) -> Result<Evaluation, EvaluatorError>;

    /// Name used in log lines
    fn name(&self) -> &str {
        "evaluator"
    }
}

#[derive(Debug, Serialize)]
struct EvaluationRequest<'a> {
    fen: &'a str,
}

/// Evaluator backed by an HTTP endpoint
///
/// POSTs `{"fen": ...}` and expects `{"probability": f64, "move": "e7e5"}`.
/// The blocking client runs on its own thread so no async runtime is needed.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct HttpEvaluator {
    url: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpEvaluator {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn request(url: &str, fen: &str) -> Result<Evaluation, EvaluatorError> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .post(url)
            .json(&EvaluationRequest { fen })
            .send()
            .map_err(|e| EvaluatorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EvaluatorError::Transport(format!(
                "Request failed ({})",
                status
            )));
        }

        let body = response
            .text()
            .map_err(|e| EvaluatorError::Transport(e.to_string()))?;
        parse_evaluation(&body)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl Evaluator for HttpEvaluator {
    async fn evaluate(&self, position_id: &str) -> Result<Evaluation, EvaluatorError> {
        let (tx, rx) = futures::channel::oneshot::channel();
        let url = self.url.clone();
        let fen = position_id.to_string();

        std::thread::spawn(move || {
            let _ = tx.send(Self::request(&url, &fen));
        });

        rx.await
            .map_err(|_| EvaluatorError::Transport("Request thread exited".to_string()))?
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Decode an evaluator payload; a non-finite probability counts as malformed
pub fn parse_evaluation(body: &str) -> Result<Evaluation, EvaluatorError> {
    let evaluation: Evaluation =
        serde_json::from_str(body).map_err(|e| EvaluatorError::Malformed(e.to_string()))?;
    if !evaluation.probability.is_finite() {
        return Err(EvaluatorError::Malformed(format!(
            "probability is not a number: {}",
            evaluation.probability
        )));
    }
    Ok(evaluation)
}
