/// LLM Client — the single point of entry for all Cohere API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Cohere API directly.
/// All enhancement requests MUST go through this module; callers see only
/// `match_percentage`, and every failure here is recoverable upstream via
/// the deterministic keyword scorer.
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const COHERE_API_URL: &str = "https://api.cohere.ai/v1/generate";
/// The model used for all enhancement calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "command-xlarge-nightly";
const MAX_TOKENS: u32 = 20;
const TEMPERATURE: f32 = 0.0;
const STOP_SEQUENCES: &[&str] = &["--"];
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 5;

static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)%").expect("valid percent pattern"));

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned no generations")]
    EmptyContent,

    #[error("no percentage found in LLM output: {0:?}")]
    NoPercentage(String),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    stop_sequences: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub generations: Vec<Generation>,
}

#[derive(Debug, Deserialize)]
pub struct Generation {
    pub text: String,
}

impl GenerateResponse {
    /// Extracts the text of the first generation.
    pub fn text(&self) -> Option<&str> {
        self.generations.first().map(|g| g.text.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct CohereError {
    message: String,
}

/// The single Cohere client used for score enhancement.
/// Wraps the generate API with retry logic and percentage extraction.
#[derive(Clone)]
pub struct CohereClient {
    client: Client,
    api_key: String,
}

impl CohereClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a raw call to the generate API, returning the full response.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(&self, prompt: &str) -> Result<GenerateResponse, LlmError> {
        let request_body = GenerateRequest {
            model: MODEL,
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            stop_sequences: STOP_SEQUENCES,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Short backoff: the whole call sits under the caller's 5s timeout.
                let delay = std::time::Duration::from_millis(250 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(COHERE_API_URL)
                .bearer_auth(&self.api_key)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse error message
                let message = serde_json::from_str::<CohereError>(&body)
                    .map(|e| e.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let generate_response: GenerateResponse = response.json().await?;

            debug!(
                "LLM call succeeded: {} generation(s)",
                generate_response.generations.len()
            );

            return Ok(generate_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    /// Asks the model to estimate the skills-vs-job-description match and
    /// extracts the percentage from its free-text answer.
    pub async fn match_percentage(
        &self,
        skills: &[String],
        job_description: &str,
    ) -> Result<f64, LlmError> {
        let prompt = prompts::build_match_prompt(skills, job_description);
        let response = self.call(&prompt).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;
        extract_percentage(text).ok_or_else(|| LlmError::NoPercentage(text.to_string()))
    }
}

/// Pulls the first "NN%" or "NN.N%" figure out of free text.
fn extract_percentage(text: &str) -> Option<f64> {
    let captures = PERCENT_RE.captures(text)?;
    captures.get(1)?.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_percentage_integer() {
        assert_eq!(extract_percentage("The match is 85%."), Some(85.0));
    }

    #[test]
    fn test_extract_percentage_decimal() {
        assert_eq!(
            extract_percentage("Roughly 72.5% of skills match --"),
            Some(72.5)
        );
    }

    #[test]
    fn test_extract_percentage_takes_first_occurrence() {
        assert_eq!(extract_percentage("50% now, 80% later"), Some(50.0));
    }

    #[test]
    fn test_extract_percentage_requires_percent_sign() {
        assert_eq!(extract_percentage("the answer is 42"), None);
    }

    #[test]
    fn test_extract_percentage_no_number() {
        assert_eq!(extract_percentage("most skills appear to match"), None);
    }

    #[test]
    fn test_response_text_empty_generations() {
        let response = GenerateResponse {
            generations: vec![],
        };
        assert!(response.text().is_none());
    }

    #[test]
    fn test_generate_response_deserializes() {
        let json = r#"{"generations": [{"text": " 60% "}]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some(" 60% "));
    }
}
