//! The editing session: single owner of the Document.
//!
//! # Responsibility
//! - Route every mutation through persist-then-render, choosing between
//!   the synchronous (structural) and debounced (fine-grained) paths.
//! - Hold the single-slot snapshot backing reset/undo.
//!
//! # Invariants
//! - Persistence happens synchronously at edit time for every mutation;
//!   only rendering is ever deferred, by at most one quiet window.
//! - A failed save never blocks further editing; it is logged and surfaced
//!   as a warning notice.
//! - At most one snapshot exists; restore consumes it and a second restore
//!   is a silent no-op.

use crate::model::document::{
    Document, EducationEntry, EntryId, EntryIdGen, ExperienceEntry, LanguageEntry, SkillEntry,
    TemplateKind, ThemeKind,
};
use crate::photo::{EncodedPhoto, PhotoError};
use crate::render::render;
use crate::repo::document_repo::DocumentRepository;
use crate::schedule::RenderScheduler;
use crate::service::export::{ExportConfig, ExportSink, WATERMARK_NODE};
use log::{info, warn};
use std::time::{Duration, Instant};

/// Delay before the automatic reset-with-undo that follows an export.
pub const AUTO_RESET_DELAY: Duration = Duration::from_secs(3);

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Action a notice may offer the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAction {
    /// Restore the snapshot taken by the last reset.
    Restore,
}

impl NoticeAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Restore => "Annuler (Récupérer)",
        }
    }
}

/// User-visible, non-blocking notification emitted by session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub action: Option<NoticeAction>,
}

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
        }
    }

    fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, message)
    }

    fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    fn with_action(mut self, action: NoticeAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Result of a session operation or host tick.
///
/// `markup` is `Some` when the display sink must update now; fine-grained
/// edits leave it `None` until the debounced render fires via
/// [`CvSession::poll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUpdate {
    pub markup: Option<String>,
    pub notices: Vec<Notice>,
}

impl SessionUpdate {
    fn none() -> Self {
        Self {
            markup: None,
            notices: Vec::new(),
        }
    }
}

/// Personal scalar fields addressable by the generic field-update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullName,
    JobTitle,
    Email,
    Phone,
    Location,
    Website,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Role,
    Dates,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    School,
    Degree,
    Dates,
    Description,
}

/// One fine-grained (per-keystroke) field mutation.
///
/// Edits addressing an absent entry are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit<'a> {
    Personal(PersonalField, &'a str),
    Experience(EntryId, ExperienceField, &'a str),
    Education(EntryId, EducationField, &'a str),
    SkillName(usize, &'a str),
    /// Raw user input; parsed (non-numeric as 0) and clamped to [0,100].
    SkillPercentage(usize, &'a str),
    LanguageName(usize, &'a str),
    LanguageLevel(usize, &'a str),
}

/// The interactive editing session; exactly one Document, one snapshot
/// slot and one scheduler, all confined to the host's single control flow.
pub struct CvSession<R: DocumentRepository> {
    repo: R,
    doc: Document,
    snapshot: Option<Document>,
    scheduler: RenderScheduler,
    ids: EntryIdGen,
    pending_reset_at: Option<Instant>,
}

impl<R: DocumentRepository> CvSession<R> {
    /// Opens a session from the repository, falling back to the default
    /// Document when nothing is stored or loading fails. Never fails.
    pub fn open(repo: R) -> Self {
        let doc = match repo.load() {
            Ok(Some(doc)) => doc,
            Ok(None) => Document::default(),
            Err(err) => {
                warn!("event=session_open module=service status=degraded error={err}");
                Document::default()
            }
        };
        info!(
            "event=session_open module=service status=ok template={} theme={}",
            doc.template.as_str(),
            doc.theme.as_str()
        );
        Self {
            repo,
            doc,
            snapshot: None,
            scheduler: RenderScheduler::new(),
            ids: EntryIdGen::new(),
            pending_reset_at: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Renders the current Document unconditionally (host initialization).
    pub fn render_now(&self) -> String {
        render(&self.doc)
    }

    // --- fine-grained path -------------------------------------------------

    /// Applies one per-keystroke field edit: persists synchronously, then
    /// defers the render through the shared debounce deadline.
    pub fn update_field(&mut self, edit: FieldEdit<'_>, now: Instant) -> SessionUpdate {
        self.apply_field_edit(edit);
        let mut notices = Vec::new();
        self.persist(&mut notices);
        self.scheduler.notify(now);
        SessionUpdate {
            markup: None,
            notices,
        }
    }

    /// Host tick: fires the pending auto-reset or the debounced render
    /// when due.
    pub fn poll(&mut self, now: Instant) -> SessionUpdate {
        if let Some(deadline) = self.pending_reset_at {
            if now >= deadline {
                self.pending_reset_at = None;
                return self.reset(true);
            }
        }
        if self.scheduler.fire_if_due(now) {
            return SessionUpdate {
                markup: Some(render(&self.doc)),
                notices: Vec::new(),
            };
        }
        SessionUpdate::none()
    }

    // --- structural path ---------------------------------------------------

    pub fn add_experience(&mut self) -> (EntryId, SessionUpdate) {
        let id = self.ids.next();
        self.doc.experiences.push(ExperienceEntry::new(id));
        (id, self.commit_structural())
    }

    pub fn remove_experience(&mut self, id: EntryId) -> SessionUpdate {
        self.doc.experiences.retain(|entry| entry.id != id);
        self.commit_structural()
    }

    pub fn add_education(&mut self) -> (EntryId, SessionUpdate) {
        let id = self.ids.next();
        self.doc.educations.push(EducationEntry::new(id));
        (id, self.commit_structural())
    }

    pub fn remove_education(&mut self, id: EntryId) -> SessionUpdate {
        self.doc.educations.retain(|entry| entry.id != id);
        self.commit_structural()
    }

    pub fn add_skill(&mut self, name: &str) -> SessionUpdate {
        self.doc.skills.push(SkillEntry::new(name));
        self.commit_structural()
    }

    pub fn remove_skill(&mut self, index: usize) -> SessionUpdate {
        if index < self.doc.skills.len() {
            self.doc.skills.remove(index);
        }
        self.commit_structural()
    }

    pub fn add_language(&mut self, name: &str) -> SessionUpdate {
        self.doc.languages.push(LanguageEntry::new(name));
        self.commit_structural()
    }

    pub fn remove_language(&mut self, index: usize) -> SessionUpdate {
        if index < self.doc.languages.len() {
            self.doc.languages.remove(index);
        }
        self.commit_structural()
    }

    pub fn add_hobby(&mut self, label: &str) -> SessionUpdate {
        self.doc.hobbies.push(label.to_string());
        self.commit_structural()
    }

    pub fn remove_hobby(&mut self, index: usize) -> SessionUpdate {
        if index < self.doc.hobbies.len() {
            self.doc.hobbies.remove(index);
        }
        self.commit_structural()
    }

    pub fn set_template(&mut self, template: TemplateKind) -> SessionUpdate {
        self.doc.template = template;
        self.commit_structural()
    }

    pub fn set_theme(&mut self, theme: ThemeKind) -> SessionUpdate {
        self.doc.theme = theme;
        self.commit_structural()
    }

    /// Completion of the image ingestion pipeline: exactly one mutation,
    /// persist, render and success notice.
    pub fn apply_photo(&mut self, photo: EncodedPhoto) -> SessionUpdate {
        self.doc.photo = Some(photo.data_url);
        let mut update = self.commit_structural();
        update
            .notices
            .push(Notice::success("Photo ajoutée avec succès"));
        update
    }

    /// Rejection of the image ingestion pipeline: exactly one error notice
    /// and no Document mutation.
    pub fn photo_rejected(&self, err: &PhotoError) -> Notice {
        let message = match err {
            PhotoError::InvalidType(_) => "Le fichier doit être une image".to_string(),
            PhotoError::TooLarge(_) => "Image trop lourde (Max 5Mo)".to_string(),
            PhotoError::Decode(_) | PhotoError::Encode(_) => {
                format!("Impossible de traiter l'image : {err}")
            }
        };
        Notice::error(message)
    }

    // --- snapshot / undo ---------------------------------------------------

    /// Clears all content while carrying `template`/`theme` over, after
    /// deep-copying the current Document into the single snapshot slot.
    pub fn reset(&mut self, with_undo: bool) -> SessionUpdate {
        self.snapshot = Some(self.doc.clone());
        self.doc = self.doc.cleared();
        info!("event=document_reset module=service status=ok with_undo={with_undo}");

        let mut update = self.commit_structural();
        update.notices.push(if with_undo {
            Notice::info("Formulaire vidé.").with_action(NoticeAction::Restore)
        } else {
            Notice::success("Formulaire réinitialisé.")
        });
        update
    }

    /// Restores the snapshot, consuming it; a no-op when none exists.
    pub fn restore(&mut self) -> SessionUpdate {
        let Some(snapshot) = self.snapshot.take() else {
            return SessionUpdate::none();
        };
        self.doc = snapshot;
        let mut update = self.commit_structural();
        update.notices.push(Notice::success("Données restaurées !"));
        update
    }

    // --- data exchange -----------------------------------------------------

    /// Loads the pre-filled demonstration Document.
    pub fn load_sample(&mut self) -> SessionUpdate {
        self.doc = Document::sample();
        let mut update = self.commit_structural();
        update
            .notices
            .push(Notice::success("Données d'exemple chargées"));
        update
    }

    /// Serializes the full Document for the host's download collaborator.
    pub fn export_json(&self) -> serde_json::Result<String> {
        self.doc.to_json()
    }

    /// Replaces the Document from an uploaded structured-text file; a
    /// malformed file leaves the Document untouched.
    pub fn import_json(&mut self, raw: &str) -> SessionUpdate {
        match Document::from_json(raw) {
            Ok(doc) => {
                self.doc = doc;
                let mut update = self.commit_structural();
                update.notices.push(Notice::success("Données importées"));
                update
            }
            Err(err) => SessionUpdate {
                markup: None,
                notices: vec![Notice::error(format!(
                    "Fichier de données invalide : {err}"
                ))],
            },
        }
    }

    // --- export ------------------------------------------------------------

    /// Hands fully rendered markup to the export sink, bracketed by the
    /// watermark node, and on completion schedules an automatic
    /// reset-with-undo after [`AUTO_RESET_DELAY`] (driven by `poll`).
    pub fn export<S: ExportSink>(
        &mut self,
        sink: &mut S,
        config: &ExportConfig,
        now: Instant,
    ) -> SessionUpdate {
        let markup = render(&self.doc);
        let mut bracketed = markup.clone();
        bracketed.push_str(WATERMARK_NODE);

        match sink.produce(&bracketed, config) {
            Ok(()) => {
                info!("event=document_export module=service status=ok bytes={}", markup.len());
                self.pending_reset_at = Some(now + AUTO_RESET_DELAY);
                SessionUpdate {
                    markup: Some(markup),
                    notices: vec![Notice::success("PDF téléchargé avec succès !")],
                }
            }
            Err(err) => {
                warn!("event=document_export module=service status=error error={err}");
                SessionUpdate {
                    markup: Some(markup),
                    notices: vec![Notice::error(format!(
                        "Échec de la génération du PDF : {err}"
                    ))],
                }
            }
        }
    }

    // --- internals ---------------------------------------------------------

    fn apply_field_edit(&mut self, edit: FieldEdit<'_>) {
        match edit {
            FieldEdit::Personal(field, value) => {
                let p = &mut self.doc.personal;
                let slot = match field {
                    PersonalField::FullName => &mut p.full_name,
                    PersonalField::JobTitle => &mut p.job_title,
                    PersonalField::Email => &mut p.email,
                    PersonalField::Phone => &mut p.phone,
                    PersonalField::Location => &mut p.location,
                    PersonalField::Website => &mut p.website,
                    PersonalField::Summary => &mut p.summary,
                };
                *slot = value.to_string();
            }
            FieldEdit::Experience(id, field, value) => {
                if let Some(entry) = self.doc.experiences.iter_mut().find(|e| e.id == id) {
                    let slot = match field {
                        ExperienceField::Company => &mut entry.company,
                        ExperienceField::Role => &mut entry.role,
                        ExperienceField::Dates => &mut entry.dates,
                        ExperienceField::Description => &mut entry.description,
                    };
                    *slot = value.to_string();
                }
            }
            FieldEdit::Education(id, field, value) => {
                if let Some(entry) = self.doc.educations.iter_mut().find(|e| e.id == id) {
                    let slot = match field {
                        EducationField::School => &mut entry.school,
                        EducationField::Degree => &mut entry.degree,
                        EducationField::Dates => &mut entry.dates,
                        EducationField::Description => &mut entry.description,
                    };
                    *slot = value.to_string();
                }
            }
            FieldEdit::SkillName(index, value) => {
                if let Some(skill) = self.doc.skills.get_mut(index) {
                    skill.name = value.to_string();
                }
            }
            FieldEdit::SkillPercentage(index, raw) => {
                if let Some(skill) = self.doc.skills.get_mut(index) {
                    skill.set_percentage_raw(raw);
                }
            }
            FieldEdit::LanguageName(index, value) => {
                if let Some(language) = self.doc.languages.get_mut(index) {
                    language.name = value.to_string();
                }
            }
            FieldEdit::LanguageLevel(index, value) => {
                if let Some(language) = self.doc.languages.get_mut(index) {
                    language.level = value.to_string();
                }
            }
        }
    }

    /// Structural edits persist, drop any now-redundant debounce deadline
    /// and render synchronously.
    fn commit_structural(&mut self) -> SessionUpdate {
        let mut notices = Vec::new();
        self.persist(&mut notices);
        self.scheduler.clear();
        SessionUpdate {
            markup: Some(render(&self.doc)),
            notices,
        }
    }

    fn persist(&mut self, notices: &mut Vec<Notice>) {
        if let Err(err) = self.repo.save(&self.doc) {
            warn!("event=document_save module=service status=error error={err}");
            notices.push(Notice::warning(
                "Sauvegarde locale impossible : vos dernières modifications ne sont pas enregistrées",
            ));
        }
    }
}
