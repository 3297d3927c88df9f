use cvstudio_core::{
    render, Document, ExperienceEntry, LanguageEntry, SkillEntry, TemplateKind,
};

fn all_templates() -> [TemplateKind; 3] {
    [
        TemplateKind::Executive,
        TemplateKind::Creative,
        TemplateKind::Minimal,
    ]
}

#[test]
fn every_template_renders_the_empty_document_with_placeholders() {
    for template in all_templates() {
        let mut doc = Document::default();
        doc.template = template;
        let markup = render(&doc);

        assert!(markup.contains("Votre Nom"), "{template:?}");
        assert!(markup.contains("Votre Titre Professionnel"), "{template:?}");
        // The skills header is the one section that never disappears.
        assert!(markup.contains("Compétences"), "{template:?}");
        assert!(!markup.contains("Expériences"), "{template:?}");
        assert!(!markup.contains("Langues"), "{template:?}");
        assert!(!markup.contains("Loisirs"), "{template:?}");
    }
}

#[test]
fn blank_entry_fields_render_their_placeholders() {
    let mut doc = Document::default();
    doc.experiences.push(ExperienceEntry::new(1));
    let markup = render(&doc);

    assert!(markup.contains("Poste"));
    assert!(markup.contains("Entreprise"));
    assert!(markup.contains("Période"));
}

#[test]
fn entries_render_in_stored_order() {
    let mut doc = Document::default();
    for (id, role) in [(1, "Premier poste"), (2, "Deuxième poste")] {
        let mut entry = ExperienceEntry::new(id);
        entry.role = role.to_string();
        doc.experiences.push(entry);
    }
    let markup = render(&doc);

    let first = markup.find("Premier poste").unwrap();
    let second = markup.find("Deuxième poste").unwrap();
    assert!(first < second);
}

#[test]
fn user_values_are_escaped_in_every_template() {
    for template in all_templates() {
        let mut doc = Document::default();
        doc.template = template;
        doc.personal.full_name = "<script>alert(1)</script>".to_string();
        doc.skills.push(SkillEntry {
            name: "C & C++".to_string(),
            percentage: 50,
        });
        let markup = render(&doc);

        assert!(!markup.contains("<script>"), "{template:?}");
        assert!(markup.contains("&lt;script&gt;"), "{template:?}");
        assert!(markup.contains("C &amp; C++"), "{template:?}");
    }
}

#[test]
fn skill_percentages_drive_the_progress_bars() {
    let mut doc = Document::default();
    doc.skills.push(SkillEntry {
        name: "Rust".to_string(),
        percentage: 72,
    });
    let markup = render(&doc);

    assert!(markup.contains("72%"));
    assert!(markup.contains("width: 72%"));
}

#[test]
fn executive_website_renders_without_its_scheme() {
    let mut doc = Document::default();
    doc.personal.website = "https://github.com/mkone".to_string();
    let markup = render(&doc);

    assert!(markup.contains("github.com/mkone"));
    assert!(!markup.contains("https://github.com/mkone"));
}

#[test]
fn templates_differ_in_layout_but_share_the_data() {
    let mut doc = Document::sample();
    let mut variants = Vec::new();
    for template in all_templates() {
        doc.template = template;
        variants.push(render(&doc));
    }

    assert!(variants[1].contains("cv-sidebar"));
    assert!(variants[2].contains("cv-name-serif"));
    assert_ne!(variants[0], variants[1]);
    assert_ne!(variants[1], variants[2]);
    for markup in &variants {
        assert!(markup.contains(&doc.personal.full_name));
    }
}

#[test]
fn photo_is_embedded_when_present_and_absent_otherwise() {
    let mut doc = Document::default();
    assert!(!render(&doc).contains("cv-photo"));

    doc.photo = Some("data:image/jpeg;base64,AAAA".to_string());
    let markup = render(&doc);
    assert!(markup.contains("cv-photo"));
    assert!(markup.contains("data:image/jpeg;base64,AAAA"));
}

#[test]
fn language_entries_show_name_and_level() {
    let mut doc = Document::default();
    doc.languages.push(LanguageEntry {
        name: "Anglais".to_string(),
        level: "Avancé".to_string(),
    });
    let markup = render(&doc);

    assert!(markup.contains("Langues"));
    assert!(markup.contains("Anglais"));
    assert!(markup.contains("Avancé"));
}
