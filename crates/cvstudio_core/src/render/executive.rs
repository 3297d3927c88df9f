//! Executive template: centered header above a two-column grid.

use super::{
    display_percent, escape_html, text_or, website_label, PLACEHOLDER_COMPANY, PLACEHOLDER_DATES,
    PLACEHOLDER_DEGREE, PLACEHOLDER_NAME, PLACEHOLDER_ROLE, PLACEHOLDER_SCHOOL, PLACEHOLDER_TITLE,
};
use crate::model::document::Document;

pub(super) fn render(doc: &Document) -> String {
    let mut out = String::new();
    let p = &doc.personal;

    out.push_str("<header class=\"cv-header\">\n");
    if let Some(photo) = &doc.photo {
        out.push_str(&format!(
            "<div class=\"cv-photo cv-photo-round\"><img src=\"{}\" alt=\"Photo\"></div>\n",
            escape_html(photo)
        ));
    }
    out.push_str(&format!(
        "<h1 class=\"cv-name\">{}</h1>\n<p class=\"cv-title\">{}</p>\n",
        text_or(&p.full_name, PLACEHOLDER_NAME),
        text_or(&p.job_title, PLACEHOLDER_TITLE)
    ));
    out.push_str("<div class=\"cv-info-list\">\n");
    for value in [&p.email, &p.phone, &p.location] {
        if !value.trim().is_empty() {
            out.push_str(&format!("<span>{}</span>\n", escape_html(value)));
        }
    }
    if !p.website.trim().is_empty() {
        out.push_str(&format!("<span>{}</span>\n", website_label(&p.website)));
    }
    out.push_str("</div>\n</header>\n");

    out.push_str("<div class=\"cv-columns\">\n<div class=\"cv-col-main\">\n");

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
                 <div class=\"cv-entry-head\"><span>{}</span><span class=\"cv-entry-dates\">{}</span></div>\
                 <div class=\"cv-entry-org\">{}</div>\
                 <p class=\"cv-entry-desc\">{}</p>\
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
                 <div class=\"cv-entry-head\"><span>{}</span><span class=\"cv-entry-dates\">{}</span></div>\
                 <div class=\"cv-entry-org\">{}</div>\
                 </div>\n",
                text_or(&edu.degree, PLACEHOLDER_DEGREE),
                escape_html(&edu.dates),
                text_or(&edu.school, PLACEHOLDER_SCHOOL)
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
