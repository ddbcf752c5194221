//! Feedback log. One JSON object per line, appended to a flat file; this is
//! user feedback about the tool, not scoring history.

pub mod handlers;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;

use crate::errors::AppError;

const FEEDBACK_FILE: &str = "feedback.json";

/// A single feedback submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub name: String,
    pub feedback: String,
    pub recorded_at: DateTime<Utc>,
}

/// Append-only feedback store rooted at a data directory.
pub struct FeedbackStore {
    dir: PathBuf,
}

impl FeedbackStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Appends one feedback entry, creating the data directory on first use.
    pub async fn append(&self, name: &str, feedback: &str) -> Result<FeedbackEntry, AppError> {
        let entry = FeedbackEntry {
            name: name.to_string(),
            feedback: feedback.to_string(),
            recorded_at: Utc::now(),
        };

        tokio::fs::create_dir_all(&self.dir).await?;

        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let path = self.dir.join(FEEDBACK_FILE);
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(line.as_bytes()).await?;

        Ok(entry)
    }
}
