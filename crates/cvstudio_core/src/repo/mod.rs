//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the whole-document persistence contract.
//! - Isolate SQLite query details from session orchestration.
//!
//! # Invariants
//! - Writes always persist the full serialized Document (no deltas).
//! - Corrupt persisted payloads degrade to `None` with a logged
//!   diagnostic, never an error to the caller.

pub mod document_repo;
