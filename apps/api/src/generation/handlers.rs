//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::{generate_resume, GenerateRequest};
use crate::matching::enhance::ScoreBackend;
use crate::render::Template;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ats_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_backend: Option<ScoreBackend>,
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
///
/// Lists the fixed template set for pickers.
pub async fn handle_list_templates() -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        templates: Template::all().iter().map(|t| t.name()).collect(),
    })
}

/// POST /api/v1/resumes/generate
///
/// Renders the resume and scores it against the job description when one is
/// supplied. The score fields are omitted entirely without a job description.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let generated = generate_resume(state.enhancer.as_deref(), request).await?;

    Ok(Json(GenerateResponse {
        html: generated.html,
        ats_score: generated.ats_score,
        score_backend: generated.score_backend,
    }))
}
