//! Minimal template: stripped-down serif header, monochrome accents.

use super::{
    display_percent, escape_html, text_or, PLACEHOLDER_COMPANY, PLACEHOLDER_DATES,
    PLACEHOLDER_DEGREE, PLACEHOLDER_NAME, PLACEHOLDER_ROLE, PLACEHOLDER_SCHOOL, PLACEHOLDER_TITLE,
};
use crate::model::document::Document;

pub(super) fn render(doc: &Document) -> String {
    let mut out = String::new();
    let p = &doc.personal;

    out.push_str("<header class=\"cv-header cv-header-rule\">\n<div class=\"cv-identity\">\n");
    if let Some(photo) = &doc.photo {
        out.push_str(&format!(
            "<div class=\"cv-photo cv-photo-square\"><img src=\"{}\" alt=\"Photo\"></div>\n",
            escape_html(photo)
        ));
    }
    out.push_str(&format!(
        "<div><h1 class=\"cv-name cv-name-serif\">{}</h1>\
         <p class=\"cv-title\">{}</p></div>\n</div>\n",
        text_or(&p.full_name, PLACEHOLDER_NAME),
        text_or(&p.job_title, PLACEHOLDER_TITLE)
    ));
    out.push_str("<div class=\"cv-contact-stack\">\n");
    for value in [&p.email, &p.phone, &p.location] {
        if !value.trim().is_empty() {
            out.push_str(&format!("<div>{}</div>\n", escape_html(value)));
        }
    }
    out.push_str("</div>\n</header>\n");

    if !p.summary.trim().is_empty() {
        out.push_str(&format!(
            "<section class=\"cv-section\"><h2 class=\"cv-section-title\">À propos</h2>\
             <p class=\"cv-summary\">{}</p></section>\n",
            escape_html(&p.summary)
        ));
    }

    out.push_str("<div class=\"cv-columns\">\n<div class=\"cv-col-main\">\n");

    if !doc.experiences.is_empty() {
        out.push_str(
            "<section class=\"cv-section\">\
             <h2 class=\"cv-section-title\">Expérience Professionnelle</h2>\n",
        );
        for exp in &doc.experiences {
            out.push_str(&format!(
                "<div class=\"cv-entry\">\
                 <div class=\"cv-entry-head\"><strong>{}</strong><span class=\"cv-entry-dates\">{}</span></div>\
                 <div class=\"cv-entry-org\">{}</div>\
                 <p class=\"cv-entry-desc cv-entry-desc-rule\">{}</p>\
                 </div>\n",
                text_or(&exp.role, PLACEHOLDER_ROLE),
                text_or(&exp.dates, PLACEHOLDER_DATES),
                text_or(&exp.company, PLACEHOLDER_COMPANY),
                escape_html(&exp.description)
            ));
        }
        out.push_str("</section>\n");
    }

    if !doc.educations.is_empty() {
        out.push_str(
            "<section class=\"cv-section\"><h2 class=\"cv-section-title\">Formation</h2>\n",
        );
        for edu in &doc.educations {
            out.push_str(&format!(
                "<div class=\"cv-entry\">\
                 <div class=\"cv-entry-role\">{}</div>\
                 <div class=\"cv-entry-org\">{}</div>\
                 <div class=\"cv-entry-dates\">{}</div>\
                 </div>\n",
                text_or(&edu.degree, PLACEHOLDER_DEGREE),
                text_or(&edu.school, PLACEHOLDER_SCHOOL),
                escape_html(&edu.dates)
            ));
        }
        out.push_str("</section>\n");
    }

    out.push_str("</div>\n<div class=\"cv-col-side\">\n");

    // The skills header always renders, even when the list is empty.
    out.push_str(
        "<section class=\"cv-section\"><h2 class=\"cv-section-title\">Compétences</h2>\n\
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
    out.push_str("</div></section>\n");

    if !doc.languages.is_empty() {
        out.push_str(
            "<section class=\"cv-section\"><h2 class=\"cv-section-title\">Langues</h2>\n",
        );
        for language in &doc.languages {
            out.push_str(&format!(
                "<div class=\"cv-language\"><span>• {}</span><span class=\"cv-language-level\">{}</span></div>\n",
                escape_html(&language.name),
                escape_html(&language.level)
            ));
        }
        out.push_str("</section>\n");
    }

    if !doc.hobbies.is_empty() {
        out.push_str(
            "<section class=\"cv-section\"><h2 class=\"cv-section-title\">Loisirs</h2>\n",
        );
        for hobby in &doc.hobbies {
            out.push_str(&format!(
                "<div class=\"cv-hobby\">• {}</div>\n",
                escape_html(hobby)
            ));
        }
        out.push_str("</section>\n");
    }

    out.push_str("</div>\n</div>\n");
    out
}
