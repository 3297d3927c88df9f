//! Document aggregate and its building blocks.
//!
//! # Responsibility
//! - Define the complete CV content plus presentation choices.
//! - Provide defaults, the percentage clamp and entry-id allocation.
//!
//! # Invariants
//! - Absent scalar fields are empty strings, never a parse error; rendering
//!   substitutes placeholders.
//! - `cleared()` preserves `template`/`theme` while dropping all content.

use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default percentage assigned to newly added or legacy compact skills.
pub const SKILL_DEFAULT_PERCENTAGE: u8 = 80;

/// Default level assigned to newly added or separator-less legacy languages.
pub const LANGUAGE_DEFAULT_LEVEL: &str = "Intermédiaire";

/// Locally-unique list entry identifier, epoch milliseconds at creation.
///
/// Entries are never created concurrently, so creation time is sufficient;
/// [`EntryIdGen`] still bumps past the last issued value to stay strictly
/// monotonic when two entries land in the same millisecond.
pub type EntryId = i64;

/// Rendering strategy selector; a closed set dispatched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Two-column layout with a centered header.
    #[default]
    Executive,
    /// Colored sidebar layout.
    Creative,
    /// Stripped-down single-accent layout.
    Minimal,
}

impl TemplateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Executive => "executive",
            Self::Creative => "creative",
            Self::Minimal => "minimal",
        }
    }

    /// Parses a persisted identifier; unrecognized values reset to default.
    pub fn from_ident(value: &str) -> Self {
        match value {
            "executive" => Self::Executive,
            "creative" => Self::Creative,
            "minimal" => Self::Minimal,
            _ => Self::default(),
        }
    }
}

/// Named color identifier resolved by the host's theme collaborator.
///
/// The Document stores only the identifier, never resolved colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Ocean,
    Violet,
    Crimson,
    Royal,
    Sunset,
    Corporate,
    Tech,
    Elegant,
    White,
}

impl ThemeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ocean => "ocean",
            Self::Violet => "violet",
            Self::Crimson => "crimson",
            Self::Royal => "royal",
            Self::Sunset => "sunset",
            Self::Corporate => "corporate",
            Self::Tech => "tech",
            Self::Elegant => "elegant",
            Self::White => "white",
        }
    }

    /// Parses a persisted identifier; unrecognized values reset to default.
    pub fn from_ident(value: &str) -> Self {
        match value {
            "ocean" => Self::Ocean,
            "violet" => Self::Violet,
            "crimson" => Self::Crimson,
            "royal" => Self::Royal,
            "sunset" => Self::Sunset,
            "corporate" => Self::Corporate,
            "tech" => Self::Tech,
            "elegant" => Self::Elegant,
            "white" => Self::White,
            _ => Self::default(),
        }
    }
}

/// Scalar identity fields; all optional, empty means "render placeholder".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub summary: String,
}

/// One work-history entry; list order is presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub company: String,
    pub role: String,
    pub dates: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            company: String::new(),
            role: String::new(),
            dates: String::new(),
            description: String::new(),
        }
    }
}

/// One education entry; list order is presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub id: EntryId,
    pub school: String,
    pub degree: String,
    pub dates: String,
    pub description: String,
}

impl EducationEntry {
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            school: String::new(),
            degree: String::new(),
            dates: String::new(),
            description: String::new(),
        }
    }
}

/// Named skill with a proficiency percentage, always within [0,100].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    pub name: String,
    pub percentage: u8,
}

impl SkillEntry {
    /// Creates a skill with the default percentage.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            percentage: SKILL_DEFAULT_PERCENTAGE,
        }
    }

    /// Replaces the percentage from raw user input, clamping to [0,100].
    pub fn set_percentage_raw(&mut self, raw: &str) {
        self.percentage = parse_percentage(raw);
    }
}

/// Spoken language with a free-text level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    pub name: String,
    pub level: String,
}

impl LanguageEntry {
    /// Creates a language with the default level.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LANGUAGE_DEFAULT_LEVEL.to_string(),
        }
    }
}

/// The root aggregate: complete CV content plus presentation choices.
///
/// Exactly one Document exists per session, exclusively owned by the active
/// [`crate::service::session::CvSession`]. Deserialization goes through the
/// migration layer in [`super::migrate`], so a loaded Document is always
/// fully in the current schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub personal: Personal,
    /// Self-contained mime-tagged data URL, never a file-system path.
    pub photo: Option<String>,
    pub experiences: Vec<ExperienceEntry>,
    pub educations: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub languages: Vec<LanguageEntry>,
    pub hobbies: Vec<String>,
    pub template: TemplateKind,
    pub theme: ThemeKind,
}

impl Document {
    /// Returns a default-content Document carrying over this one's
    /// `template` and `theme`. Used by the reset operation.
    pub fn cleared(&self) -> Self {
        Self {
            template: self.template,
            theme: self.theme,
            ..Self::default()
        }
    }

    /// Serializes to the persisted wire form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses the persisted wire form, applying schema migration.
    ///
    /// Tolerates every historical shape: missing `languages`/`hobbies`,
    /// compact skill/language strings, unrecognized template/theme
    /// identifiers and out-of-range percentages.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        super::migrate::document_from_json(raw)
    }

    /// Pre-filled demonstration content (template/theme at defaults).
    pub fn sample() -> Self {
        Self {
            personal: Personal {
                full_name: "Abdoulaye Traoré".to_string(),
                job_title: "Développeur Web Fullstack".to_string(),
                email: "abdoulaye.traore@email.com".to_string(),
                phone: "+225 07 08 09 10 11".to_string(),
                location: "Abidjan, Côte d'Ivoire".to_string(),
                website: "https://github.com/atraore".to_string(),
                summary: "Passionné par le développement web, plus de 5 ans \
                          d'expérience dans la création d'applications web \
                          performantes et scalables."
                    .to_string(),
            },
            photo: None,
            experiences: vec![
                ExperienceEntry {
                    id: 1,
                    company: "Tech Solution Africa".to_string(),
                    role: "Fullstack Developer".to_string(),
                    dates: "2021 - Présent".to_string(),
                    description: "Développement de plateformes E-commerce.\n\
                                  Management d'une équipe de 3 développeurs."
                        .to_string(),
                },
                ExperienceEntry {
                    id: 2,
                    company: "Innov CI".to_string(),
                    role: "Développeur Junior".to_string(),
                    dates: "2019 - 2021".to_string(),
                    description: "Maintenance applicative et création de \
                                  nouvelles features."
                        .to_string(),
                },
            ],
            educations: vec![EducationEntry {
                id: 3,
                school: "ESATIC Abidjan".to_string(),
                degree: "Master en Systèmes d'Information".to_string(),
                dates: "2017 - 2019".to_string(),
                description: String::new(),
            }],
            skills: vec![
                SkillEntry {
                    name: "JavaScript".to_string(),
                    percentage: 90,
                },
                SkillEntry {
                    name: "React.js".to_string(),
                    percentage: 85,
                },
                SkillEntry {
                    name: "Node.js".to_string(),
                    percentage: 80,
                },
            ],
            languages: vec![
                LanguageEntry {
                    name: "Français".to_string(),
                    level: "Maternel".to_string(),
                },
                LanguageEntry {
                    name: "Anglais".to_string(),
                    level: "Avancé".to_string(),
                },
            ],
            hobbies: vec!["Football".to_string(), "Lecture".to_string()],
            template: TemplateKind::default(),
            theme: ThemeKind::default(),
        }
    }
}

/// Parses raw user input into a clamped percentage.
///
/// Accepts an optional sign followed by digits and ignores any trailing
/// text (`"42%"` parses as 42); non-numeric input parses as 0; the result
/// is clamped to [0,100].
pub fn parse_percentage(raw: &str) -> u8 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let leading: String = digits.chars().take_while(char::is_ascii_digit).collect();
    if leading.is_empty() {
        return 0;
    }
    if negative {
        return 0;
    }
    match leading.parse::<i64>() {
        Ok(value) => clamp_percentage(value),
        // Overflow of a pure digit run can only mean "far above 100".
        Err(_) => 100,
    }
}

/// Clamps any integer into the storable [0,100] range.
pub fn clamp_percentage(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// Allocator for strictly monotonic, session-local entry identifiers.
#[derive(Debug, Default)]
pub struct EntryIdGen {
    last: EntryId,
}

impl EntryIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next identifier: current epoch milliseconds, bumped past
    /// the previous value when the clock has not advanced.
    pub fn next(&mut self) -> EntryId {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0);
        self.last = now_ms.max(self.last + 1);
        self.last
    }
}
