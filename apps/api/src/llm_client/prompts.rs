// Prompt construction for the enhancement call. The model is asked for a
// plain percentage; anything else in its answer is ignored by the caller.

/// Builds the keyword-match prompt sent to the generate API.
pub fn build_match_prompt(skills: &[String], job_description: &str) -> String {
    format!(
        "Skills: {}\nJob Description: {}\n\
         Count how many of the skills appear in the job description \
         and provide the percentage match.",
        skills.join(", "),
        job_description
    )
}
