use serde::{Deserialize, Serialize};

/// A candidate's profile as entered in the form. Everything is free text;
/// only name and email are required downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub summary: String,
    /// Display order and original casing are preserved; matching lower-cases
    /// and deduplicates on its own.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
}

/// Splits a comma-separated skills string into trimmed, non-empty entries.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skills_splits_and_trims() {
        assert_eq!(
            parse_skills(" Python ,SQL,  machine learning "),
            vec!["Python", "SQL", "machine learning"]
        );
    }

    #[test]
    fn test_parse_skills_drops_empty_entries() {
        assert_eq!(parse_skills("Python,,  ,SQL,"), vec!["Python", "SQL"]);
    }

    #[test]
    fn test_parse_skills_empty_input() {
        assert!(parse_skills("").is_empty());
        assert!(parse_skills("  ,  ").is_empty());
    }

    #[test]
    fn test_parse_skills_preserves_casing() {
        assert_eq!(parse_skills("PyTorch, SQL"), vec!["PyTorch", "SQL"]);
    }
}
