pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::feedback::handlers as feedback;
use crate::generation::handlers as generation;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/v1/templates", get(generation::handle_list_templates))
        .route(
            "/api/v1/resumes/generate",
            post(generation::handle_generate),
        )
        // Match API
        .route("/api/v1/match/score", post(matching::handle_score))
        .route("/api/v1/match/coverage", post(matching::handle_coverage))
        .route(
            "/api/v1/match/suggestions",
            post(matching::handle_suggestions),
        )
        // Feedback API
        .route("/api/v1/feedback", post(feedback::handle_submit_feedback))
        .with_state(state)
}
