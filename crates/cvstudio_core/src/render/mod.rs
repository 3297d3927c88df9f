//! Template rendering dispatcher.
//!
//! # Responsibility
//! - Turn the Document into its markup representation, pure and total.
//! - Dispatch exhaustively over the closed template set.
//!
//! # Invariants
//! - Never fails: an all-empty Document renders placeholders, not errors.
//! - All three strategies share identical data rules; they differ only in
//!   layout geometry and visual hierarchy.
//! - Experiences/educations render in stored order; empty list sections
//!   are omitted entirely, except skills whose header always renders.
//! - Every interpolated user value is HTML-escaped.

mod creative;
mod executive;
mod minimal;

use crate::model::document::{Document, TemplateKind};

pub(crate) const PLACEHOLDER_NAME: &str = "Votre Nom";
pub(crate) const PLACEHOLDER_TITLE: &str = "Votre Titre Professionnel";
pub(crate) const PLACEHOLDER_ROLE: &str = "Poste";
pub(crate) const PLACEHOLDER_DATES: &str = "Période";
pub(crate) const PLACEHOLDER_COMPANY: &str = "Entreprise";
pub(crate) const PLACEHOLDER_DEGREE: &str = "Diplôme";
pub(crate) const PLACEHOLDER_SCHOOL: &str = "Établissement";

/// Renders the Document through its selected template strategy.
pub fn render(doc: &Document) -> String {
    match doc.template {
        TemplateKind::Executive => executive::render(doc),
        TemplateKind::Creative => creative::render(doc),
        TemplateKind::Minimal => minimal::render(doc),
    }
}

/// Escapes a user-entered value for interpolation into markup.
pub(crate) fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escapes `value`, or substitutes the literal placeholder when empty.
pub(crate) fn text_or(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        escape_html(value)
    }
}

/// Display form of a website: scheme stripped, escaped.
pub(crate) fn website_label(website: &str) -> String {
    escape_html(website.trim().trim_start_matches("https://"))
}

/// Display-side percentage clamp; storage already guarantees [0,100].
pub(crate) fn display_percent(percentage: u8) -> u8 {
    percentage.min(100)
}

#[cfg(test)]
mod tests {
    use super::{escape_html, text_or, website_label};

    #[test]
    fn escape_html_covers_markup_metacharacters() {
        assert_eq!(
            escape_html(r#"<b title="x">&'</b>"#),
            "&lt;b title=&quot;x&quot;&gt;&amp;&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn text_or_substitutes_placeholder_for_blank_values() {
        assert_eq!(text_or("  ", "Votre Nom"), "Votre Nom");
        assert_eq!(text_or("Awa", "Votre Nom"), "Awa");
    }

    #[test]
    fn website_label_strips_the_scheme() {
        assert_eq!(website_label("https://github.com/atraore"), "github.com/atraore");
        assert_eq!(website_label("github.com/atraore"), "github.com/atraore");
    }
}
