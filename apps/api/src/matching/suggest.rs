//! Keyword suggestions from a static role-profile table.

/// A role profile: the role-name trigger plus the keywords an ATS filter
/// typically expects for that role.
#[derive(Debug, Clone, Copy)]
pub struct RoleProfile {
    pub role: &'static str,
    pub keywords: &'static [&'static str],
}

/// Reference role-profile table. Table order is load-bearing: the first
/// role whose name appears in the job description wins and later matches
/// are ignored, so reordering entries changes suggestions.
pub const ROLE_PROFILES: &[RoleProfile] = &[
    RoleProfile {
        role: "data scientist",
        keywords: &["python", "machine learning", "sql", "pandas", "numpy"],
    },
    RoleProfile {
        role: "web developer",
        keywords: &["html", "css", "javascript", "react", "node.js"],
    },
    RoleProfile {
        role: "data analyst",
        keywords: &["excel", "sql", "tableau", "powerbi", "statistics"],
    },
    RoleProfile {
        role: "ai engineer",
        keywords: &["deep learning", "tensorflow", "pytorch", "nlp", "mlops"],
    },
    RoleProfile {
        role: "software engineer",
        keywords: &["java", "c++", "python", "git", "linux"],
    },
];

/// Suggests keywords to add, based on the first role profile whose name
/// appears in the job description.
///
/// Both inputs are lower-cased and compared as raw substrings, not tokens.
/// Keywords already present anywhere in `current_skills` are skipped; the
/// rest are returned in profile order. No role match yields an empty list,
/// as does a matched profile whose keywords are all covered.
pub fn suggest_keywords(job_description: &str, current_skills: &str) -> Vec<String> {
    let jd = job_description.to_lowercase();
    let skills = current_skills.to_lowercase();

    for profile in ROLE_PROFILES {
        if !jd.contains(profile.role) {
            continue;
        }
        return profile
            .keywords
            .iter()
            .filter(|kw| !skills.contains(*kw))
            .map(|kw| kw.to_string())
            .collect();
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_role_suggests_uncovered_keywords_in_order() {
        let suggestions = suggest_keywords("Looking for a Data Scientist", "python, sql");
        assert_eq!(suggestions, vec!["machine learning", "pandas", "numpy"]);
    }

    #[test]
    fn test_role_match_is_case_insensitive() {
        let suggestions = suggest_keywords("Hiring a WEB DEVELOPER now", "");
        assert_eq!(
            suggestions,
            vec!["html", "css", "javascript", "react", "node.js"]
        );
    }

    #[test]
    fn test_no_matching_role_returns_empty() {
        assert!(suggest_keywords("Looking for a barista", "python").is_empty());
    }

    #[test]
    fn test_empty_job_description_returns_empty() {
        assert!(suggest_keywords("", "python").is_empty());
    }

    #[test]
    fn test_fully_covered_profile_returns_empty() {
        let suggestions = suggest_keywords(
            "data analyst position",
            "excel, sql, tableau, powerbi, statistics",
        );
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_tie_break_follows_table_order_not_text_position() {
        // "software engineer" appears first in the text, but "data scientist"
        // sits earlier in the table, so its profile wins.
        let jd = "We want a software engineer who thinks like a data scientist";
        let suggestions = suggest_keywords(jd, "");
        assert_eq!(
            suggestions,
            vec!["python", "machine learning", "sql", "pandas", "numpy"]
        );
        assert!(!suggestions.contains(&"java".to_string()));
    }

    #[test]
    fn test_only_first_matching_role_contributes() {
        // Both roles match; no keywords from the second profile leak in.
        let suggestions = suggest_keywords("data scientist / ai engineer hybrid", "");
        assert!(!suggestions.contains(&"tensorflow".to_string()));
        assert!(!suggestions.contains(&"mlops".to_string()));
    }

    #[test]
    fn test_skill_exclusion_is_substring_based() {
        // "numpy" appears inside "numpy-stubs", so it is considered covered.
        let suggestions = suggest_keywords("data scientist wanted", "numpy-stubs");
        assert!(!suggestions.contains(&"numpy".to_string()));
        assert!(suggestions.contains(&"pandas".to_string()));
    }

    #[test]
    fn test_table_keeps_reference_order() {
        let roles: Vec<&str> = ROLE_PROFILES.iter().map(|p| p.role).collect();
        assert_eq!(
            roles,
            vec![
                "data scientist",
                "web developer",
                "data analyst",
                "ai engineer",
                "software engineer"
            ]
        );
    }
}
