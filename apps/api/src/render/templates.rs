//! The template functions themselves. Each produces a complete standalone
//! HTML document; shared section builders keep the three variants honest
//! about rendering the same profile fields.

use crate::models::resume::ResumeProfile;
use crate::render::Theme;

impl Theme {
    fn background(&self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#1e1e1e",
        }
    }

    fn text(&self) -> &'static str {
        match self {
            Theme::Light => "#222222",
            Theme::Dark => "#e0e0e0",
        }
    }

    fn accent(&self) -> &'static str {
        match self {
            Theme::Light => "#2f6feb",
            Theme::Dark => "#6ea8fe",
        }
    }
}

/// Escapes text for safe interpolation into HTML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn contact_line(profile: &ResumeProfile) -> String {
    let mut parts = vec![escape(&profile.email)];
    for field in [&profile.phone, &profile.linkedin, &profile.github] {
        if !field.trim().is_empty() {
            parts.push(escape(field));
        }
    }
    parts.join(" | ")
}

fn skills_list(profile: &ResumeProfile) -> String {
    if profile.skills.is_empty() {
        return String::new();
    }
    let items: String = profile
        .skills
        .iter()
        .map(|s| format!("<li>{}</li>", escape(s)))
        .collect();
    format!("<ul class=\"skills\">{items}</ul>")
}

fn section(title: &str, body: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }
    format!("<section><h2>{title}</h2><p>{}</p></section>", escape(body))
}

fn document(theme: Theme, title: &str, css: &str, body: String) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>\nbody {{ background: {bg}; color: {fg}; }}\nh1, h2 {{ color: {accent}; }}\n{css}\n</style>\n\
         </head>\n<body>\n{body}\n</body>\n</html>\n",
        bg = theme.background(),
        fg = theme.text(),
        accent = theme.accent(),
    )
}

/// Single-column serif layout with ruled section headings.
pub fn classic(theme: Theme, profile: &ResumeProfile) -> String {
    let name = escape(&profile.name);
    let body = format!(
        "<main class=\"classic\">\n<header><h1>{name}</h1><p>{contact}</p></header>\n\
         {summary}\n<section><h2>Skills</h2>{skills}</section>\n{experience}\n{education}\n</main>",
        contact = contact_line(profile),
        summary = section("Summary", &profile.summary),
        skills = skills_list(profile),
        experience = section("Experience", &profile.experience),
        education = section("Education", &profile.education),
    );
    document(
        theme,
        &name,
        "main.classic { font-family: Georgia, serif; max-width: 46rem; margin: 0 auto; }\n\
         main.classic h2 { border-bottom: 1px solid currentColor; }",
        body,
    )
}

/// Sans-serif layout with an accent banner header.
pub fn modern(theme: Theme, profile: &ResumeProfile) -> String {
    let name = escape(&profile.name);
    let body = format!(
        "<main class=\"modern\">\n<header class=\"banner\"><h1>{name}</h1><p>{contact}</p></header>\n\
         {summary}\n<section><h2>Skills</h2>{skills}</section>\n{experience}\n{education}\n</main>",
        contact = contact_line(profile),
        summary = section("Profile", &profile.summary),
        skills = skills_list(profile),
        experience = section("Experience", &profile.experience),
        education = section("Education", &profile.education),
    );
    document(
        theme,
        &name,
        "main.modern { font-family: 'Helvetica Neue', Arial, sans-serif; max-width: 50rem; margin: 0 auto; }\n\
         main.modern .banner { border-left: 6px solid currentColor; padding-left: 1rem; }\n\
         main.modern ul.skills li { display: inline-block; margin-right: 1rem; }",
        body,
    )
}

/// Dense one-page layout; skills lead, prose sections follow.
pub fn compact(theme: Theme, profile: &ResumeProfile) -> String {
    let name = escape(&profile.name);
    let body = format!(
        "<main class=\"compact\">\n<header><h1>{name}</h1><p>{contact}</p></header>\n\
         <section><h2>Skills</h2>{skills}</section>\n{summary}\n{experience}\n{education}\n</main>",
        contact = contact_line(profile),
        skills = skills_list(profile),
        summary = section("Summary", &profile.summary),
        experience = section("Experience", &profile.experience),
        education = section("Education", &profile.education),
    );
    document(
        theme,
        &name,
        "main.compact { font-family: Arial, sans-serif; font-size: 0.9rem; max-width: 44rem; margin: 0 auto; }\n\
         main.compact section { margin: 0.4rem 0; }\n\
         main.compact ul.skills { columns: 2; }",
        body,
    )
}
