//! Creative template: colored sidebar next to the main column.

use super::{
    display_percent, escape_html, text_or, PLACEHOLDER_COMPANY, PLACEHOLDER_DATES,
    PLACEHOLDER_DEGREE, PLACEHOLDER_NAME, PLACEHOLDER_ROLE, PLACEHOLDER_SCHOOL, PLACEHOLDER_TITLE,
};
use crate::model::document::Document;

pub(super) fn render(doc: &Document) -> String {
    let mut out = String::new();
    let p = &doc.personal;

    out.push_str("<div class=\"cv-sidebar\">\n");
    if let Some(photo) = &doc.photo {
        out.push_str(&format!(
            "<div class=\"cv-photo cv-photo-card\"><img src=\"{}\" alt=\"Photo\"></div>\n",
            escape_html(photo)
        ));
    }

    let has_contact = [&p.email, &p.phone, &p.location]
        .iter()
        .any(|value| !value.trim().is_empty());
    if has_contact {
        out.push_str("<div class=\"cv-side-block\"><h3 class=\"cv-side-title\">Contact</h3>\n");
        for (label, value) in [("Email", &p.email), ("Tel", &p.phone), ("Lieu", &p.location)] {
            if !value.trim().is_empty() {
                out.push_str(&format!(
                    "<div class=\"cv-contact\"><strong>{label}</strong>{}</div>\n",
                    escape_html(value)
                ));
            }
        }
        out.push_str("</div>\n");
    }

    // The skills header always renders, even when the list is empty.
    out.push_str(
        "<div class=\"cv-side-block\"><h3 class=\"cv-side-title\">Compétences</h3>\n\
         <div class=\"cv-skill-list\">\n",
    );
    for skill in &doc.skills {
        let percent = display_percent(skill.percentage);
        out.push_str(&format!(
            "<div class=\"cv-skill\">\
             <div class=\"cv-skill-head\"><span>{}</span><span>{percent}%</span></div>\
             <div class=\"cv-progress\"><div class=\"cv-progress-fill\" style=\"width: {percent}%\"></div></div>\
             </div>\n",
            escape_html(&skill.name)
        ));
    }
    out.push_str("</div></div>\n");

    if !doc.languages.is_empty() {
        out.push_str("<div class=\"cv-side-block\"><h3 class=\"cv-side-title\">Langues</h3>\n");
        for language in &doc.languages {
            out.push_str(&format!(
                "<div class=\"cv-language\"><span>• {}</span><span class=\"cv-language-level\">{}</span></div>\n",
                escape_html(&language.name),
                escape_html(&language.level)
            ));
        }
        out.push_str("</div>\n");
    }

    if !doc.hobbies.is_empty() {
        out.push_str("<div class=\"cv-side-block\"><h3 class=\"cv-side-title\">Loisirs</h3>\n");
        for hobby in &doc.hobbies {
            out.push_str(&format!(
                "<div class=\"cv-hobby\">• {}</div>\n",
                escape_html(hobby)
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"cv-main\">\n<header class=\"cv-header\">\n");
    out.push_str(&format!(
        "<h1 class=\"cv-name\">{}</h1>\n<p class=\"cv-title\">{}</p>\n</header>\n",
        text_or(&p.full_name, PLACEHOLDER_NAME),
        text_or(&p.job_title, PLACEHOLDER_TITLE)
    ));

    if !p.summary.trim().is_empty() {
        out.push_str(&format!(
            "<section class=\"cv-section\"><h2 class=\"cv-section-title\">Profil</h2>\
             <p class=\"cv-summary\">{}</p></section>\n",
            escape_html(&p.summary)
        ));
    }

    if !doc.experiences.is_empty() {
        out.push_str(
            "<section class=\"cv-section\"><h2 class=\"cv-section-title\">Expériences</h2>\n",
        );
        for exp in &doc.experiences {
            out.push_str(&format!(
                "<div class=\"cv-entry\">\
                 <div class=\"cv-entry-role\">{}</div>\
                 <div class=\"cv-entry-org\">{} • {}</div>\
                 <p class=\"cv-entry-desc\">{}</p>\
                 </div>\n",
                text_or(&exp.role, PLACEHOLDER_ROLE),
                text_or(&exp.company, PLACEHOLDER_COMPANY),
                text_or(&exp.dates, PLACEHOLDER_DATES),
                escape_html(&exp.description)
            ));
        }
        out.push_str("</section>\n");
    }

    if !doc.educations.is_empty() {
        out.push_str(
            "<section class=\"cv-section\"><h2 class=\"cv-section-title\">Formations</h2>\n",
        );
        for edu in &doc.educations {
            out.push_str(&format!(
                "<div class=\"cv-entry\">\
                 <div class=\"cv-entry-role\">{}</div>\
                 <div class=\"cv-entry-org\">{} • {}</div>\
                 </div>\n",
                text_or(&edu.degree, PLACEHOLDER_DEGREE),
                text_or(&edu.school, PLACEHOLDER_SCHOOL),
                escape_html(&edu.dates)
            ));
        }
        out.push_str("</section>\n");
    }

    out.push_str("</div>\n");
    out
}
