//! Forward-only schema migration for persisted Documents.
//!
//! # Responsibility
//! - Parse every historical wire shape into the current schema.
//! - Upgrade legacy compact skill/language strings transparently.
//!
//! # Invariants
//! - Migration is idempotent: re-parsing an already-current payload is a
//!   no-op.
//! - Fields introduced after the first schema revision (`languages`,
//!   `hobbies`) default to empty when absent.
//! - Percentages and template/theme identifiers are normalized here, so
//!   downstream code never sees out-of-range or unknown values.

use super::document::{
    clamp_percentage, Document, EducationEntry, EntryId, ExperienceEntry, LanguageEntry, Personal,
    SkillEntry, TemplateKind, ThemeKind, LANGUAGE_DEFAULT_LEVEL, SKILL_DEFAULT_PERCENTAGE,
};
use serde::{Deserialize, Deserializer};

/// Separator splitting legacy `"Name - Level"` language strings.
const LEGACY_LANGUAGE_SEPARATOR: &str = " - ";

pub(crate) fn document_from_json(raw: &str) -> serde_json::Result<Document> {
    serde_json::from_str(raw)
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DocumentWire::deserialize(deserializer).map(DocumentWire::into_document)
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct DocumentWire {
    personal: PersonalWire,
    photo: Option<String>,
    experiences: Vec<ExperienceWire>,
    educations: Vec<EducationWire>,
    skills: Vec<SkillWire>,
    languages: Vec<LanguageWire>,
    hobbies: Vec<String>,
    template: String,
    theme: String,
}

impl DocumentWire {
    fn into_document(self) -> Document {
        Document {
            personal: self.personal.into_personal(),
            photo: self.photo.filter(|value| !value.is_empty()),
            experiences: self
                .experiences
                .into_iter()
                .map(ExperienceWire::into_entry)
                .collect(),
            educations: self
                .educations
                .into_iter()
                .map(EducationWire::into_entry)
                .collect(),
            skills: self.skills.into_iter().map(SkillWire::into_entry).collect(),
            languages: self
                .languages
                .into_iter()
                .map(LanguageWire::into_entry)
                .collect(),
            hobbies: self.hobbies,
            template: TemplateKind::from_ident(&self.template),
            theme: ThemeKind::from_ident(&self.theme),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct PersonalWire {
    full_name: String,
    job_title: String,
    email: String,
    phone: String,
    location: String,
    website: String,
    summary: String,
}

impl PersonalWire {
    fn into_personal(self) -> Personal {
        Personal {
            full_name: self.full_name,
            job_title: self.job_title,
            email: self.email,
            phone: self.phone,
            location: self.location,
            website: self.website,
            summary: self.summary,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ExperienceWire {
    id: EntryId,
    company: String,
    role: String,
    dates: String,
    description: String,
}

impl ExperienceWire {
    fn into_entry(self) -> ExperienceEntry {
        ExperienceEntry {
            id: self.id,
            company: self.company,
            role: self.role,
            dates: self.dates,
            description: self.description,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct EducationWire {
    id: EntryId,
    school: String,
    degree: String,
    dates: String,
    description: String,
}

impl EducationWire {
    fn into_entry(self) -> EducationEntry {
        EducationEntry {
            id: self.id,
            school: self.school,
            degree: self.degree,
            dates: self.dates,
            description: self.description,
        }
    }
}

/// Skill wire form: either the current record or a legacy bare name.
#[derive(Deserialize)]
#[serde(untagged)]
enum SkillWire {
    Compact(String),
    Structured {
        name: String,
        #[serde(default)]
        percentage: i64,
    },
}

impl SkillWire {
    fn into_entry(self) -> SkillEntry {
        match self {
            Self::Compact(name) => SkillEntry {
                name,
                percentage: SKILL_DEFAULT_PERCENTAGE,
            },
            Self::Structured { name, percentage } => SkillEntry {
                name,
                percentage: clamp_percentage(percentage),
            },
        }
    }
}

/// Language wire form: either the current record or a legacy
/// `"Name - Level"` string.
#[derive(Deserialize)]
#[serde(untagged)]
enum LanguageWire {
    Compact(String),
    Structured {
        name: String,
        #[serde(default)]
        level: String,
    },
}

impl LanguageWire {
    fn into_entry(self) -> LanguageEntry {
        match self {
            Self::Compact(compact) => match compact.split_once(LEGACY_LANGUAGE_SEPARATOR) {
                Some((name, level)) => LanguageEntry {
                    name: name.to_string(),
                    level: level.to_string(),
                },
                None => LanguageEntry {
                    name: compact,
                    level: LANGUAGE_DEFAULT_LEVEL.to_string(),
                },
            },
            Self::Structured { name, level } => LanguageEntry { name, level },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::document::Document;

    #[test]
    fn compact_language_without_separator_gets_default_level() {
        let doc = Document::from_json(r#"{"languages": ["Anglais"]}"#).unwrap();
        assert_eq!(doc.languages[0].name, "Anglais");
        assert_eq!(doc.languages[0].level, "Intermédiaire");
    }

    #[test]
    fn compact_language_splits_on_first_separator_only() {
        let doc = Document::from_json(r#"{"languages": ["Krio - Courant - Oral"]}"#).unwrap();
        assert_eq!(doc.languages[0].name, "Krio");
        assert_eq!(doc.languages[0].level, "Courant - Oral");
    }

    #[test]
    fn structured_skill_percentage_is_clamped_on_load() {
        let doc =
            Document::from_json(r#"{"skills": [{"name": "Go", "percentage": 640}]}"#).unwrap();
        assert_eq!(doc.skills[0].percentage, 100);
    }
}
