//! Generation pipeline: validate, render, score.

use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::enhance::{score_with_enhancement, ScoreBackend, ScoreEnhancer};
use crate::models::resume::{parse_skills, ResumeProfile};
use crate::render::{render, Template, Theme};

/// The full form payload. Skills arrive comma-separated, exactly as typed.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
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
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub template: Template,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub job_description: String,
}

/// Rendered output plus the optional match score.
#[derive(Debug)]
pub struct GeneratedResume {
    pub html: String,
    pub ats_score: Option<f64>,
    pub score_backend: Option<ScoreBackend>,
}

/// Renders the resume and, when a job description was supplied, scores the
/// declared skills against it. Name and email are the only required fields.
///
/// Scoring prefers the enhancer when one is configured; the keyword formula
/// covers every failure, so generation never fails because of the LLM.
pub async fn generate_resume(
    enhancer: Option<&dyn ScoreEnhancer>,
    request: GenerateRequest,
) -> Result<GeneratedResume, AppError> {
    if request.name.trim().is_empty() || request.email.trim().is_empty() {
        return Err(AppError::Validation(
            "name and email are required to generate a resume".to_string(),
        ));
    }

    let profile = ResumeProfile {
        name: request.name.trim().to_string(),
        email: request.email.trim().to_string(),
        phone: request.phone,
        linkedin: request.linkedin,
        github: request.github,
        summary: request.summary,
        skills: parse_skills(&request.skills),
        experience: request.experience,
        education: request.education,
    };

    let html = render(request.template, request.theme, &profile);

    let (ats_score, score_backend) = if request.job_description.trim().is_empty() {
        (None, None)
    } else {
        let (score, backend) =
            score_with_enhancement(enhancer, &profile.skills, &request.job_description).await;
        (Some(score), Some(backend))
    };

    Ok(GeneratedResume {
        html,
        ats_score,
        score_backend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    fn request() -> GenerateRequest {
        GenerateRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            linkedin: String::new(),
            github: String::new(),
            summary: "Analyst and programmer.".to_string(),
            skills: "Python, SQL".to_string(),
            experience: String::new(),
            education: String::new(),
            template: Template::Classic,
            theme: Theme::Light,
            job_description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let mut req = request();
        req.name = "   ".to_string();
        let err = generate_resume(None, req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_blank_email_is_rejected() {
        let mut req = request();
        req.email = String::new();
        let err = generate_resume(None, req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_no_job_description_means_no_score() {
        let generated = generate_resume(None, request()).await.unwrap();
        assert!(generated.html.contains("Ada Lovelace"));
        assert_eq!(generated.ats_score, None);
        assert_eq!(generated.score_backend, None);
    }

    #[tokio::test]
    async fn test_job_description_produces_keyword_score() {
        let mut req = request();
        req.job_description = "We need Python experience".to_string();
        let generated = generate_resume(None, req).await.unwrap();
        assert_eq!(generated.ats_score, Some(50.0));
        assert_eq!(generated.score_backend, Some(ScoreBackend::Keyword));
    }

    #[tokio::test]
    async fn test_enhancer_is_consulted_when_present() {
        struct Fixed;

        #[async_trait]
        impl ScoreEnhancer for Fixed {
            async fn enhance(&self, _skills: &[String], _jd: &str) -> anyhow::Result<f64> {
                Ok(77.0)
            }
        }

        let mut req = request();
        req.job_description = "We need Python experience".to_string();
        let generated = generate_resume(Some(&Fixed), req).await.unwrap();
        assert_eq!(generated.ats_score, Some(77.0));
        assert_eq!(generated.score_backend, Some(ScoreBackend::Enhanced));
    }

    #[tokio::test]
    async fn test_skills_are_parsed_from_comma_string() {
        let mut req = request();
        req.skills = "Python, , SQL,".to_string();
        req.job_description = "Python and SQL".to_string();
        let generated = generate_resume(None, req).await.unwrap();
        assert_eq!(generated.ats_score, Some(100.0));
    }
}
