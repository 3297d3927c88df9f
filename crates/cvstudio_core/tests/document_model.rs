use cvstudio_core::{
    Document, EducationEntry, ExperienceEntry, LanguageEntry, SkillEntry, TemplateKind, ThemeKind,
};

fn populated_document() -> Document {
    let mut doc = Document::default();
    doc.personal.full_name = "Awa Diop".to_string();
    doc.personal.job_title = "Data Engineer".to_string();
    doc.personal.website = "https://example.com/awa".to_string();
    doc.photo = Some("data:image/jpeg;base64,AAAA".to_string());
    doc.experiences.push(ExperienceEntry {
        id: 10,
        company: "Acme".to_string(),
        role: "Engineer".to_string(),
        dates: "2020 - 2023".to_string(),
        description: "Pipelines.".to_string(),
    });
    doc.educations.push(EducationEntry {
        id: 11,
        school: "UCAD".to_string(),
        degree: "Licence".to_string(),
        dates: "2016 - 2019".to_string(),
        description: String::new(),
    });
    doc.skills.push(SkillEntry {
        name: "Rust".to_string(),
        percentage: 72,
    });
    doc.languages.push(LanguageEntry {
        name: "Wolof".to_string(),
        level: "Maternel".to_string(),
    });
    doc.hobbies.push("Photographie".to_string());
    doc.template = TemplateKind::Creative;
    doc.theme = ThemeKind::Tech;
    doc
}

#[test]
fn default_document_is_empty_with_default_presentation() {
    let doc = Document::default();
    assert!(doc.personal.full_name.is_empty());
    assert!(doc.photo.is_none());
    assert!(doc.experiences.is_empty());
    assert!(doc.educations.is_empty());
    assert!(doc.skills.is_empty());
    assert!(doc.languages.is_empty());
    assert!(doc.hobbies.is_empty());
    assert_eq!(doc.template, TemplateKind::Executive);
    assert_eq!(doc.theme, ThemeKind::Ocean);
}

#[test]
fn json_round_trip_preserves_a_current_schema_document() {
    let doc = populated_document();
    let raw = doc.to_json().unwrap();
    let loaded = Document::from_json(&raw).unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn wire_form_uses_the_original_field_names() {
    let raw = populated_document().to_json().unwrap();
    assert!(raw.contains("\"fullName\""));
    assert!(raw.contains("\"jobTitle\""));
    assert!(raw.contains("\"template\":\"creative\""));
    assert!(raw.contains("\"theme\":\"tech\""));
}

#[test]
fn cleared_keeps_presentation_and_drops_content() {
    let doc = populated_document();
    let cleared = doc.cleared();
    assert_eq!(cleared.template, TemplateKind::Creative);
    assert_eq!(cleared.theme, ThemeKind::Tech);
    assert!(cleared.personal.full_name.is_empty());
    assert!(cleared.photo.is_none());
    assert!(cleared.experiences.is_empty());
    assert!(cleared.skills.is_empty());
}

#[test]
fn sample_document_is_renderable_content() {
    let doc = Document::sample();
    assert!(!doc.personal.full_name.is_empty());
    assert!(!doc.experiences.is_empty());
    assert!(doc.skills.iter().all(|skill| skill.percentage <= 100));
}
