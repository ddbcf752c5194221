use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only the port needs to parse; everything else has a sensible default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enables the LLM score enhancer when set. Absent means the service
    /// runs on the deterministic keyword scorer alone.
    pub cohere_api_key: Option<String>,
    /// Directory the feedback log is appended under.
    pub feedback_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            cohere_api_key: std::env::var("COHERE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            feedback_dir: std::env::var("FEEDBACK_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
