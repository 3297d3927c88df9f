//! Domain model for the CV document.
//!
//! # Responsibility
//! - Define the single versioned Document aggregate and its defaults.
//! - Keep one canonical schema; older persisted shapes are upgraded at the
//!   parse boundary so downstream code never sees legacy forms.
//!
//! # Invariants
//! - Skill percentages are clamped to [0,100] by every mutator.
//! - Entry identifiers are strictly monotonic within a session.
//! - `template`/`theme` always hold one of the recognized values.

pub mod document;
pub(crate) mod migrate;
