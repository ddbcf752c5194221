use std::sync::Arc;

use crate::config::Config;
use crate::feedback::FeedbackStore;
use crate::matching::enhance::ScoreEnhancer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Kept on state so future handlers can read runtime settings.
    #[allow(dead_code)]
    pub config: Config,
    /// Optional score enhancer, absent when COHERE_API_KEY is not set.
    /// Scoring falls back to the deterministic keyword formula without it.
    pub enhancer: Option<Arc<dyn ScoreEnhancer>>,
    pub feedback: Arc<FeedbackStore>,
}
