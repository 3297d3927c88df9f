//! Document repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the single Document under one fixed slot.
//! - Recover from corrupt payloads by signalling "nothing stored".
//!
//! # Invariants
//! - `save` serializes the full Document; it is invoked after every
//!   mutating operation and its failure must be surfaced by the caller,
//!   never dropped.
//! - `load` returns a fully migrated, current-schema Document.

use crate::db::{migrations::latest_version, DbError};
use crate::model::document::Document;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed slot key: exactly one document is in scope at a time.
const DOCUMENT_SLOT: &str = "cv";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for document persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "document serialization failed: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; \
                 open it through db::open_db"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Whole-document persistence contract.
pub trait DocumentRepository {
    /// Durably stores the full Document under the fixed slot.
    fn save(&self, doc: &Document) -> RepoResult<()>;

    /// Loads and migrates the stored Document.
    ///
    /// Returns `None` when nothing is stored or when the payload is
    /// structurally corrupt (logged, not fatal).
    fn load(&self) -> RepoResult<Option<Document>>;
}

/// SQLite-backed document repository.
#[derive(Debug)]
pub struct SqliteDocumentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDocumentRepository<'conn> {
    /// Wraps a connection previously opened through [`crate::db::open_db`].
    ///
    /// Rejects connections whose schema version does not match this binary,
    /// so the slot is never touched before migrations ran.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected = latest_version();
        let actual =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        if actual != expected {
            return Err(RepoError::UninitializedConnection {
                expected_version: expected,
                actual_version: actual,
            });
        }
        Ok(Self { conn })
    }
}

impl DocumentRepository for SqliteDocumentRepository<'_> {
    fn save(&self, doc: &Document) -> RepoResult<()> {
        let payload = doc.to_json()?;
        self.conn.execute(
            "INSERT INTO document (slot, payload, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(slot) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![DOCUMENT_SLOT, payload],
        )?;
        Ok(())
    }

    fn load(&self) -> RepoResult<Option<Document>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM document WHERE slot = ?1;",
                [DOCUMENT_SLOT],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        match Document::from_json(&payload) {
            Ok(doc) => Ok(Some(doc)),
            Err(err) => {
                warn!(
                    "event=document_load module=repo status=error error_code=corrupt_payload error={err}"
                );
                Ok(None)
            }
        }
    }
}
