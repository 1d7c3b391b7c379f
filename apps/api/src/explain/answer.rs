//! Answer Generator — the asynchronous step that turns a composed request into
//! a raw explanation.
//!
//! Default: `DemoAnswerGenerator` (canned opener + echoed request, never fails).
//! `AppState` holds an `Arc<dyn AnswerGenerator>` so a real backend can be
//! swapped in at startup without touching handlers.

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::errors::AppError;
use crate::explain::prompts::DEMO_OPENERS;

#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    async fn answer(&self, prompt: &str) -> Result<String, AppError>;

    /// Backend label surfaced for transparency.
    fn backend(&self) -> &'static str;
}

/// Offline generator: `"<opener> <prompt>"` with a randomly chosen opener.
/// The opener varies, the structure does not.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoAnswerGenerator;

#[async_trait]
impl AnswerGenerator for DemoAnswerGenerator {
    async fn answer(&self, prompt: &str) -> Result<String, AppError> {
        let opener = DEMO_OPENERS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(DEMO_OPENERS[0]);
        debug!(prompt_len = prompt.len(), "demo answer generated");
        Ok(format!("{opener} {prompt}"))
    }

    fn backend(&self) -> &'static str {
        "demo"
    }
}
