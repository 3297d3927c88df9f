//! Export sink boundary.
//!
//! # Responsibility
//! - Define the contract toward the external paginated-document renderer.
//! - Hold the fixed layout configuration the engine hands to it.
//!
//! # Invariants
//! - The engine passes fully rendered markup, bracketed by a cosmetic
//!   watermark node that is not part of the retained markup.

use crate::model::document::Document;

/// Cosmetic node appended to the markup for the duration of an export.
pub(crate) const WATERMARK_NODE: &str = "<div class=\"cv-watermark\"></div>";

/// Page format understood by the export collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFormat {
    #[default]
    A4,
    Letter,
}

/// Fixed layout configuration consumed by the export sink.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub page_format: PageFormat,
    pub margin_mm: u8,
    /// Bitmap fidelity inside the produced document, in (0,1].
    pub image_quality: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            page_format: PageFormat::A4,
            margin_mm: 0,
            image_quality: 0.98,
        }
    }
}

/// External collaborator producing the downloadable paginated document.
///
/// The engine's only obligations toward it are met by
/// [`crate::service::session::CvSession::export`]; the sink itself is
/// opaque.
pub trait ExportSink {
    type Error: std::fmt::Display;

    fn produce(&mut self, markup: &str, config: &ExportConfig) -> Result<(), Self::Error>;
}

/// Suggested download name for the produced document.
pub fn default_filename(doc: &Document) -> String {
    let name = doc.personal.full_name.trim();
    if name.is_empty() {
        "CV_Export.pdf".to_string()
    } else {
        format!("CV_{name}.pdf")
    }
}
