//! Image ingestion pipeline for the document photo.
//!
//! # Responsibility
//! - Validate, decode, downscale and re-encode an uploaded photo into a
//!   self-contained embeddable form.
//!
//! # Invariants
//! - Type and size are rejected before any decode work.
//! - The dominant axis is never upscaled; output is at most 400 px on its
//!   dominant axis with aspect ratio preserved.
//! - The pipeline is pure: it never touches the Document itself.

mod ingest;

pub use ingest::{ingest_photo, EncodedPhoto, PhotoError, MAX_EDGE_PX, MAX_UPLOAD_BYTES};
