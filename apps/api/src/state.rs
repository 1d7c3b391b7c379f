use std::sync::Arc;

use crate::ats::match_scoring::{KeywordMatchScorer, MatchScorer};
use crate::config::Config;
use crate::explain::answer::{AnswerGenerator, DemoAnswerGenerator};

/// Shared application state injected into all route handlers via Axum extractors.
/// The text core itself never sees it.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable CV/JD scorer. Default: KeywordMatchScorer.
    pub match_scorer: Arc<dyn MatchScorer>,
    /// Pluggable answer backend. Default: DemoAnswerGenerator (offline, canned).
    pub answer_generator: Arc<dyn AnswerGenerator>,
}

impl AppState {
    /// State wired with the default scorer and the demo answer backend.
    pub fn with_defaults(config: Config) -> Self {
        AppState {
            config,
            match_scorer: Arc::new(KeywordMatchScorer),
            answer_generator: Arc::new(DemoAnswerGenerator),
        }
    }
}
