//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cvstudio_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use cvstudio_core::db::open_db_in_memory;
use cvstudio_core::{CvSession, SqliteDocumentRepository};

fn main() {
    println!("cvstudio_core version={}", cvstudio_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("store open failed: {err}");
            std::process::exit(1);
        }
    };
    let repo = match SqliteDocumentRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("repository init failed: {err}");
            std::process::exit(1);
        }
    };

    let session = CvSession::open(repo);
    let markup = session.render_now();
    println!(
        "default document template={} markup_bytes={}",
        session.document().template.as_str(),
        markup.len()
    );
}
