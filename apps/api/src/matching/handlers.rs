//! Axum route handlers for the Match API.
//!
//! Per the engine's contract these endpoints never reject malformed input:
//! empty skills or an empty job description degrade to a zero score or an
//! empty suggestion list, matching the pure functions underneath.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::matching::enhance::{score_with_enhancement, ScoreBackend};
use crate::matching::scorer::resume_coverage_score;
use crate::matching::suggest::suggest_keywords;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    /// Percentage of declared skills found in the job description.
    pub score: f64,
    pub backend: ScoreBackend,
}

#[derive(Debug, Deserialize)]
pub struct CoverageRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct CoverageResponse {
    /// Percentage of job-description keywords found in the resume text.
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    #[serde(default)]
    pub job_description: String,
    /// Raw skills text as typed; keywords already present in it are skipped.
    #[serde(default)]
    pub current_skills: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub keywords: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Skill-match mode: how many of the declared skills does the posting
/// mention? Uses the enhancer when configured, with keyword fallback.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoreResponse> {
    let (score, backend) = score_with_enhancement(
        state.enhancer.as_deref(),
        &request.skills,
        &request.job_description,
    )
    .await;

    Json(ScoreResponse { score, backend })
}

/// POST /api/v1/match/coverage
///
/// Full-resume mode: how much of the posting's keyword set does the resume
/// text cover? Always deterministic.
pub async fn handle_coverage(Json(request): Json<CoverageRequest>) -> Json<CoverageResponse> {
    let score = resume_coverage_score(&request.resume_text, &request.job_description);
    Json(CoverageResponse { score })
}

/// POST /api/v1/match/suggestions
///
/// Keywords worth adding, from the first role profile named in the posting.
pub async fn handle_suggestions(
    Json(request): Json<SuggestionsRequest>,
) -> Json<SuggestionsResponse> {
    let keywords = suggest_keywords(&request.job_description, &request.current_skills);
    Json(SuggestionsResponse { keywords })
}
