// Resume rendering. Pure functions from a profile record to an HTML string;
// template selection is a closed enum, themes are a closed enum. No I/O and
// no template engine, so rendering is trivially deterministic and testable.

pub mod templates;

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeProfile;

/// The fixed set of resume templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Classic,
    Modern,
    Compact,
}

impl Template {
    /// Every available template, in display order.
    pub fn all() -> &'static [Template] {
        &[Template::Classic, Template::Modern, Template::Compact]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Template::Classic => "classic",
            Template::Modern => "modern",
            Template::Compact => "compact",
        }
    }
}

/// Color scheme applied to any template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Renders the profile with the selected template and theme.
pub fn render(template: Template, theme: Theme, profile: &ResumeProfile) -> String {
    match template {
        Template::Classic => templates::classic(theme, profile),
        Template::Modern => templates::modern(theme, profile),
        Template::Compact => templates::compact(theme, profile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ResumeProfile {
        ResumeProfile {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            linkedin: "https://linkedin.com/in/ada".to_string(),
            github: "https://github.com/ada".to_string(),
            summary: "Analyst and programmer.".to_string(),
            skills: vec!["Python".to_string(), "SQL".to_string()],
            experience: "Analytical Engine programmer".to_string(),
            education: "Self-taught mathematics".to_string(),
        }
    }

    #[test]
    fn test_all_templates_render_name_and_email() {
        for template in Template::all() {
            let html = render(*template, Theme::Light, &profile());
            assert!(html.contains("Ada Lovelace"), "{template:?} missing name");
            assert!(html.contains("ada@example.com"), "{template:?} missing email");
        }
    }

    #[test]
    fn test_all_templates_render_skills_as_list_items() {
        for template in Template::all() {
            let html = render(*template, Theme::Light, &profile());
            assert!(html.contains("<li>Python</li>"), "{template:?} missing skill");
            assert!(html.contains("<li>SQL</li>"), "{template:?} missing skill");
        }
    }

    #[test]
    fn test_templates_are_distinct() {
        let p = profile();
        let classic = render(Template::Classic, Theme::Light, &p);
        let modern = render(Template::Modern, Theme::Light, &p);
        let compact = render(Template::Compact, Theme::Light, &p);
        assert_ne!(classic, modern);
        assert_ne!(modern, compact);
        assert_ne!(classic, compact);
    }

    #[test]
    fn test_theme_changes_output() {
        let p = profile();
        let light = render(Template::Classic, Theme::Light, &p);
        let dark = render(Template::Classic, Theme::Dark, &p);
        assert_ne!(light, dark);
    }

    #[test]
    fn test_rendering_is_pure() {
        let p = profile();
        assert_eq!(
            render(Template::Modern, Theme::Dark, &p),
            render(Template::Modern, Theme::Dark, &p)
        );
    }

    #[test]
    fn test_markup_in_profile_is_escaped() {
        let mut p = profile();
        p.name = "<script>alert(1)</script>".to_string();
        let html = render(Template::Classic, Theme::Light, &p);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_template_names_are_stable() {
        let names: Vec<&str> = Template::all().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["classic", "modern", "compact"]);
    }

    #[test]
    fn test_template_deserializes_from_lowercase() {
        let t: Template = serde_json::from_str(r#""modern""#).unwrap();
        assert_eq!(t, Template::Modern);
    }
}
