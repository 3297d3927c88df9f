//! Session orchestration over the document engine.
//!
//! # Responsibility
//! - Own the single Document, snapshot slot and render scheduler.
//! - Keep host/UI layers decoupled from storage and rendering details.
//!
//! # See also
//! - `session` for the edit operations, `export` for the sink boundary.

pub mod export;
pub mod session;
