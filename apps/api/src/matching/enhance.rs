//! Optional score enhancement with a mandatory deterministic fallback.
//!
//! An enhancer is an injected strategy object carried in `AppState` as
//! `Option<Arc<dyn ScoreEnhancer>>`. When absent, or on any failure of the
//! external call, scoring resolves to the pure keyword formula so callers
//! always receive a valid number. The fallback is not best-effort: no
//! enhancer error ever reaches a caller.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::llm_client::CohereClient;
use crate::matching::scorer::skill_match_score;

/// Upper bound on the external enhancement call. On expiry the
/// deterministic scorer takes over.
pub const ENHANCEMENT_TIMEOUT: Duration = Duration::from_secs(5);

/// A backend that can refine the keyword match percentage.
///
/// Implementations must return a percentage in [0, 100]; out-of-range
/// values are discarded by [`score_with_enhancement`].
#[async_trait]
pub trait ScoreEnhancer: Send + Sync {
    async fn enhance(&self, skills: &[String], job_description: &str) -> anyhow::Result<f64>;
}

/// Which backend produced a score. Reported to callers for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBackend {
    Keyword,
    Enhanced,
}

/// LLM-backed enhancer delegating to the Cohere generate client.
pub struct LlmScoreEnhancer(pub CohereClient);

#[async_trait]
impl ScoreEnhancer for LlmScoreEnhancer {
    async fn enhance(&self, skills: &[String], job_description: &str) -> anyhow::Result<f64> {
        let pct = self.0.match_percentage(skills, job_description).await?;
        Ok(pct)
    }
}

/// Scores skills against a job description, preferring the enhancer when
/// one is configured.
///
/// Every failure path (no enhancer, empty inputs, timeout, backend error,
/// out-of-range result) resolves to [`skill_match_score`]. Failures are
/// logged and suppressed.
pub async fn score_with_enhancement(
    enhancer: Option<&dyn ScoreEnhancer>,
    skills: &[String],
    job_description: &str,
) -> (f64, ScoreBackend) {
    let fallback = || (skill_match_score(skills, job_description), ScoreBackend::Keyword);

    let Some(enhancer) = enhancer else {
        return fallback();
    };
    // Nothing for the LLM to refine; the keyword formula already pins these to 0.
    if skills.is_empty() || job_description.trim().is_empty() {
        return fallback();
    }

    match tokio::time::timeout(
        ENHANCEMENT_TIMEOUT,
        enhancer.enhance(skills, job_description),
    )
    .await
    {
        Ok(Ok(score)) if (0.0..=100.0).contains(&score) => (score, ScoreBackend::Enhanced),
        Ok(Ok(score)) => {
            warn!("enhancement returned out-of-range score {score}, using keyword scorer");
            fallback()
        }
        Ok(Err(e)) => {
            warn!("enhancement failed: {e:#}, using keyword scorer");
            fallback()
        }
        Err(_) => {
            warn!(
                "enhancement timed out after {}s, using keyword scorer",
                ENHANCEMENT_TIMEOUT.as_secs()
            );
            fallback()
        }
    }
}
