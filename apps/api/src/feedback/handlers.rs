//! Axum route handler for feedback submission.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub name: String,
    pub feedback: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub status: String,
}

/// POST /api/v1/feedback
///
/// Appends a feedback entry. Blank name or feedback is rejected.
pub async fn handle_submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    if request.feedback.trim().is_empty() {
        return Err(AppError::Validation("feedback cannot be empty".to_string()));
    }

    state
        .feedback
        .append(request.name.trim(), request.feedback.trim())
        .await?;

    Ok(Json(FeedbackResponse {
        status: "recorded".to_string(),
    }))
}
