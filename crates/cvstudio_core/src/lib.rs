//! Reactive document engine for the CvStudio CV editor.
//! This crate is the single source of truth for document invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod photo;
pub mod render;
pub mod repo;
pub mod schedule;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{
    Document, EducationEntry, EntryId, ExperienceEntry, LanguageEntry, Personal, SkillEntry,
    TemplateKind, ThemeKind,
};
pub use photo::{ingest_photo, EncodedPhoto, PhotoError};
pub use render::render;
pub use repo::document_repo::{
    DocumentRepository, RepoError, RepoResult, SqliteDocumentRepository,
};
pub use schedule::RenderScheduler;
pub use service::export::{ExportConfig, ExportSink, PageFormat};
pub use service::session::{
    CvSession, EducationField, ExperienceField, FieldEdit, Notice, NoticeAction, NoticeKind,
    PersonalField, SessionUpdate,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
