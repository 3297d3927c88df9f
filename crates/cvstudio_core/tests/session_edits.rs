use cvstudio_core::{
    CvSession, Document, DocumentRepository, ExperienceField, ExportConfig, ExportSink, FieldEdit,
    NoticeAction, NoticeKind, PersonalField, RepoError, RepoResult, TemplateKind,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// In-memory repository recording every save through a shared handle.
#[derive(Default)]
struct RecordingRepo {
    saves: Rc<RefCell<Vec<Document>>>,
    stored: Option<Document>,
}

impl DocumentRepository for RecordingRepo {
    fn save(&self, doc: &Document) -> RepoResult<()> {
        self.saves.borrow_mut().push(doc.clone());
        Ok(())
    }

    fn load(&self) -> RepoResult<Option<Document>> {
        Ok(self.stored.clone())
    }
}

fn json_error() -> RepoError {
    RepoError::Serialize(serde_json::from_str::<serde_json::Value>("{").unwrap_err())
}

/// Repository whose every operation fails.
struct FailingRepo;

impl DocumentRepository for FailingRepo {
    fn save(&self, _doc: &Document) -> RepoResult<()> {
        Err(json_error())
    }

    fn load(&self) -> RepoResult<Option<Document>> {
        Err(json_error())
    }
}

/// Export sink capturing the markup it is handed.
#[derive(Default)]
struct CaptureSink {
    captured: Vec<String>,
    fail: bool,
}

impl ExportSink for CaptureSink {
    type Error = String;

    fn produce(&mut self, markup: &str, _config: &ExportConfig) -> Result<(), String> {
        if self.fail {
            return Err("renderer unavailable".to_string());
        }
        self.captured.push(markup.to_string());
        Ok(())
    }
}

fn session_with_saves() -> (CvSession<RecordingRepo>, Rc<RefCell<Vec<Document>>>) {
    let repo = RecordingRepo::default();
    let saves = Rc::clone(&repo.saves);
    (CvSession::open(repo), saves)
}

#[test]
fn open_loads_the_stored_document() {
    let doc = Document::sample();
    let repo = RecordingRepo {
        saves: Rc::default(),
        stored: Some(doc.clone()),
    };
    let session = CvSession::open(repo);
    assert_eq!(session.document(), &doc);
}

#[test]
fn open_degrades_to_the_default_document_when_loading_fails() {
    let session = CvSession::open(FailingRepo);
    assert_eq!(session.document(), &Document::default());
}

#[test]
fn fine_grained_edits_persist_immediately_but_render_once_after_the_quiet_window() {
    let (mut session, saves) = session_with_saves();
    let t0 = Instant::now();

    session.add_skill("Go");
    let saves_before = saves.borrow().len();

    for (offset_ms, raw) in [(0, "40"), (50, "41"), (100, "42")] {
        let update = session.update_field(
            FieldEdit::SkillPercentage(0, raw),
            t0 + Duration::from_millis(offset_ms),
        );
        assert_eq!(update.markup, None);
    }

    // Every keystroke was persisted, none was rendered yet.
    assert_eq!(saves.borrow().len(), saves_before + 3);
    assert_eq!(saves.borrow().last().unwrap().skills[0].percentage, 42);

    // Still inside the window measured from the last edit.
    let idle = session.poll(t0 + Duration::from_millis(250));
    assert_eq!(idle.markup, None);

    let fired = session.poll(t0 + Duration::from_millis(400));
    let markup = fired.markup.expect("debounced render");
    assert!(markup.contains("42%"));

    // The deadline is consumed; the next tick is quiet.
    let again = session.poll(t0 + Duration::from_millis(500));
    assert_eq!(again.markup, None);
}

#[test]
fn structural_edits_render_synchronously_and_drop_a_pending_debounce() {
    let (mut session, _saves) = session_with_saves();
    let t0 = Instant::now();

    session.update_field(FieldEdit::Personal(PersonalField::FullName, "Awa"), t0);
    let update = session.set_template(TemplateKind::Minimal);
    assert!(update.markup.is_some());

    // The synchronous render already covered the pending fine-grained edit.
    let later = session.poll(t0 + Duration::from_secs(1));
    assert_eq!(later.markup, None);
}

#[test]
fn entry_edits_address_entries_by_id_and_ignore_absent_ids() {
    let (mut session, _saves) = session_with_saves();
    let t0 = Instant::now();

    let (first, _) = session.add_experience();
    let (second, _) = session.add_experience();
    assert_ne!(first, second);

    session.update_field(
        FieldEdit::Experience(second, ExperienceField::Company, "Acme"),
        t0,
    );
    session.update_field(
        FieldEdit::Experience(first + second, ExperienceField::Company, "Ghost"),
        t0,
    );

    let doc = session.document();
    assert_eq!(doc.experiences[1].company, "Acme");
    assert!(doc.experiences.iter().all(|e| e.company != "Ghost"));
}

#[test]
fn out_of_range_removals_are_silent_no_ops() {
    let (mut session, _saves) = session_with_saves();

    let update = session.remove_skill(7);
    assert!(update.markup.is_some());
    assert!(update.notices.is_empty());

    let (id, _) = session.add_experience();
    session.remove_experience(id + 1);
    assert_eq!(session.document().experiences.len(), 1);
}

#[test]
fn reset_with_undo_snapshots_and_restore_consumes_the_snapshot() {
    let (mut session, _saves) = session_with_saves();
    session.load_sample();
    session.set_template(TemplateKind::Creative);
    let before = session.document().clone();

    let update = session.reset(true);
    assert!(update.markup.is_some());
    let notice = update.notices.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.action, Some(NoticeAction::Restore));

    assert!(session.has_snapshot());
    assert!(session.document().personal.full_name.is_empty());
    assert_eq!(session.document().template, TemplateKind::Creative);

    let restored = session.restore();
    assert_eq!(session.document(), &before);
    assert_eq!(
        restored.notices.last().unwrap().kind,
        NoticeKind::Success
    );

    // The slot is empty now; a second restore changes nothing.
    assert!(!session.has_snapshot());
    let again = session.restore();
    assert_eq!(again.markup, None);
    assert!(again.notices.is_empty());
    assert_eq!(session.document(), &before);
}

#[test]
fn reset_without_undo_still_snapshots_but_notifies_differently() {
    let (mut session, _saves) = session_with_saves();
    session.load_sample();

    let update = session.reset(false);
    let notice = update.notices.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.action, None);
}

#[test]
fn export_brackets_the_markup_with_the_watermark_and_schedules_the_auto_reset() {
    let (mut session, _saves) = session_with_saves();
    session.load_sample();
    let before = session.document().clone();
    let t0 = Instant::now();

    let mut sink = CaptureSink::default();
    let update = session.export(&mut sink, &ExportConfig::default(), t0);

    assert_eq!(update.notices.last().unwrap().kind, NoticeKind::Success);
    let handed = sink.captured.last().unwrap();
    assert!(handed.ends_with("<div class=\"cv-watermark\"></div>"));
    // The retained markup is watermark-free.
    assert!(!update.markup.unwrap().contains("cv-watermark"));

    // Nothing happens before the delay elapses.
    let early = session.poll(t0 + Duration::from_secs(2));
    assert_eq!(early.markup, None);
    assert_eq!(session.document(), &before);

    let fired = session.poll(t0 + Duration::from_secs(3));
    assert!(fired.markup.is_some());
    assert_eq!(
        fired.notices.last().unwrap().action,
        Some(NoticeAction::Restore)
    );
    assert!(session.document().personal.full_name.is_empty());

    session.restore();
    assert_eq!(session.document(), &before);
}

#[test]
fn failed_export_reports_an_error_and_schedules_nothing() {
    let (mut session, _saves) = session_with_saves();
    session.load_sample();
    let before = session.document().clone();
    let t0 = Instant::now();

    let mut sink = CaptureSink {
        fail: true,
        ..CaptureSink::default()
    };
    let update = session.export(&mut sink, &ExportConfig::default(), t0);
    assert_eq!(update.notices.last().unwrap().kind, NoticeKind::Error);

    let later = session.poll(t0 + Duration::from_secs(10));
    assert_eq!(later.markup, None);
    assert_eq!(session.document(), &before);
}

#[test]
fn a_failed_save_warns_but_never_blocks_editing() {
    let mut session = CvSession::open(FailingRepo);
    let t0 = Instant::now();

    let update = session.update_field(FieldEdit::Personal(PersonalField::FullName, "Awa"), t0);
    let notice = update.notices.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Warning);
    assert!(notice.message.contains("Sauvegarde locale impossible"));
    assert_eq!(session.document().personal.full_name, "Awa");

    // Editing continues through further failures.
    let update = session.add_skill("Rust");
    assert!(update.markup.is_some());
    assert_eq!(session.document().skills.len(), 1);
}

#[test]
fn accepted_photo_is_applied_and_rejection_leaves_the_document_alone() {
    let (mut session, _saves) = session_with_saves();

    let photo = cvstudio_core::EncodedPhoto {
        width: 400,
        height: 100,
        data_url: "data:image/jpeg;base64,AAAA".to_string(),
    };
    let update = session.apply_photo(photo);
    assert_eq!(update.notices.last().unwrap().message, "Photo ajoutée avec succès");
    assert!(session.document().photo.is_some());

    let before = session.document().clone();
    let notice = session.photo_rejected(&cvstudio_core::PhotoError::TooLarge(9_000_000));
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Image trop lourde (Max 5Mo)");
    assert_eq!(session.document(), &before);
}

#[test]
fn exported_json_imports_into_an_identical_document() {
    let (mut session, _saves) = session_with_saves();
    session.load_sample();
    let raw = session.export_json().unwrap();

    let (mut other, _saves) = session_with_saves();
    let update = other.import_json(&raw);
    assert!(update.markup.is_some());
    assert_eq!(other.document(), session.document());
}

#[test]
fn importing_a_malformed_file_leaves_the_document_untouched() {
    let (mut session, _saves) = session_with_saves();
    session.load_sample();
    let before = session.document().clone();

    let update = session.import_json("{broken");
    assert_eq!(update.markup, None);
    assert_eq!(update.notices.last().unwrap().kind, NoticeKind::Error);
    assert_eq!(session.document(), &before);
}
