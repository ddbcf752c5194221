//! ATS scoring. Two formulas with different denominators, exposed as two
//! named operations because they answer different questions:
//!
//! * [`skill_match_score`] asks "how many of MY skills does the posting
//!   mention?" (skills matched / skills declared).
//! * [`resume_coverage_score`] asks "how much of the POSTING does my resume
//!   cover?" (job keywords found in resume / job keywords).
//!
//! Both are pure and never error; malformed input degrades to 0.

use std::collections::HashSet;

use crate::matching::tokenizer::tokenize;

/// Fraction of declared skills that appear in the job description, as a
/// percentage in [0, 100].
///
/// Each skill string is lower-cased and tested for membership in the job
/// description's token set as-is. A multi-word skill such as
/// "machine learning" is therefore never matched, because the tokenizer
/// only emits single-word tokens; callers who want phrase coverage should
/// use [`resume_coverage_score`] instead. Skills are deduplicated
/// case-insensitively before counting, so "SQL, sql" counts as one skill.
///
/// Returns 0.0 when the skill list or the job description is empty.
pub fn skill_match_score(skills: &[String], job_description: &str) -> f64 {
    let job_tokens = tokenize(job_description);
    if job_tokens.is_empty() {
        return 0.0;
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut total = 0usize;
    let mut matched = 0usize;

    for skill in skills {
        let lowered = skill.trim().to_lowercase();
        if lowered.is_empty() || !seen.insert(lowered.clone()) {
            continue;
        }
        total += 1;
        if job_tokens.contains(&lowered) {
            matched += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }
    (matched as f64 / total as f64) * 100.0
}

/// Fraction of job-description keywords found anywhere in the resume text,
/// as a percentage in [0, 100].
///
/// This is the inverse ratio of [`skill_match_score`]: the denominator is
/// the job description's token count, not the candidate's skill count.
/// Returns 0.0 when the job description has no tokens.
pub fn resume_coverage_score(resume_text: &str, job_description: &str) -> f64 {
    let job_tokens = tokenize(job_description);
    if job_tokens.is_empty() {
        return 0.0;
    }

    let resume_tokens = tokenize(resume_text);
    let matched = job_tokens.intersection(&resume_tokens).count();
    (matched as f64 / job_tokens.len() as f64) * 100.0
}
