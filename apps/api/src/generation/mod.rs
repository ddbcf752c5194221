// Resume generation: parse the form fields, render the selected template,
// and attach an ATS score when a job description is supplied.
// All LLM calls go through llm_client, behind the ScoreEnhancer seam.

pub mod generator;
pub mod handlers;
