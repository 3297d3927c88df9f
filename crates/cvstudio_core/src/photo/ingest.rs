//! Upload validation, bounded downscale and data-URL encoding.

use base64::{engine::general_purpose, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Uploads larger than this are rejected before decoding.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Bounding box edge for the embedded photo.
pub const MAX_EDGE_PX: u32 = 400;

/// Re-encode quality. The stored photo is always re-encoded at this fixed
/// quality, even when no resize was needed.
const JPEG_QUALITY: u8 = 80;

/// A bounded, re-encoded photo ready to embed in the Document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPhoto {
    pub width: u32,
    pub height: u32,
    /// `data:image/jpeg;base64,...`; self-describing, never a path.
    pub data_url: String,
}

/// Ingestion failure; every variant is recoverable and user-visible.
#[derive(Debug)]
pub enum PhotoError {
    /// The upload is not an image (checked on the declared mime type).
    InvalidType(String),
    /// The upload exceeds [`MAX_UPLOAD_BYTES`] before decoding.
    TooLarge(usize),
    Decode(image::ImageError),
    Encode(image::ImageError),
}

impl Display for PhotoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidType(mime) => write!(f, "unsupported upload type `{mime}`"),
            Self::TooLarge(bytes) => write!(
                f,
                "upload of {bytes} bytes exceeds the {MAX_UPLOAD_BYTES} byte limit"
            ),
            Self::Decode(err) => write!(f, "image decode failed: {err}"),
            Self::Encode(err) => write!(f, "image encode failed: {err}"),
        }
    }
}

impl Error for PhotoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) | Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

/// Turns an uploaded file into a bounded, embeddable photo.
///
/// # Contract
/// - Rejects non-image mime types and oversized payloads before decoding.
/// - Downscales so the dominant axis is at most [`MAX_EDGE_PX`], preserving
///   aspect ratio; never upscales.
/// - Always re-encodes (lossy, fixed quality), even for already-small
///   input.
pub fn ingest_photo(bytes: &[u8], mime: &str) -> Result<EncodedPhoto, PhotoError> {
    if !is_image_mime(mime) {
        return Err(PhotoError::InvalidType(mime.to_string()));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(PhotoError::TooLarge(bytes.len()));
    }

    let started_at = Instant::now();
    let decoded = image::load_from_memory(bytes).map_err(PhotoError::Decode)?;

    let (source_w, source_h) = (decoded.width(), decoded.height());
    let (target_w, target_h) = bounded_dimensions(source_w, source_h);
    let bounded = if (target_w, target_h) == (source_w, source_h) {
        decoded
    } else {
        decoded.resize_exact(target_w, target_h, FilterType::Triangle)
    };

    // JPEG cannot carry an alpha channel; flatten before encoding.
    let flattened = DynamicImage::ImageRgb8(bounded.to_rgb8());
    let mut jpeg = Vec::new();
    flattened
        .write_with_encoder(JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY))
        .map_err(PhotoError::Encode)?;

    info!(
        "event=photo_ingest module=photo status=ok source={source_w}x{source_h} \
         target={target_w}x{target_h} bytes_in={} bytes_out={} duration_ms={}",
        bytes.len(),
        jpeg.len(),
        started_at.elapsed().as_millis()
    );

    Ok(EncodedPhoto {
        width: target_w,
        height: target_h,
        data_url: format!(
            "data:image/jpeg;base64,{}",
            general_purpose::STANDARD.encode(&jpeg)
        ),
    })
}

fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Computes the bounded target size: the dominant axis is capped at
/// [`MAX_EDGE_PX`] and the other axis scales proportionally. Identity for
/// images whose dominant axis is already within bounds.
fn bounded_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width >= height {
        if width <= MAX_EDGE_PX {
            return (width, height);
        }
        let scaled = (f64::from(height) * f64::from(MAX_EDGE_PX) / f64::from(width)).round();
        (MAX_EDGE_PX, (scaled as u32).max(1))
    } else {
        if height <= MAX_EDGE_PX {
            return (width, height);
        }
        let scaled = (f64::from(width) * f64::from(MAX_EDGE_PX) / f64::from(height)).round();
        ((scaled as u32).max(1), MAX_EDGE_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::{bounded_dimensions, is_image_mime, MAX_EDGE_PX};

    #[test]
    fn wide_image_caps_width_and_scales_height() {
        assert_eq!(bounded_dimensions(800, 200), (400, 100));
        assert_eq!(bounded_dimensions(1000, 999), (400, 400));
    }

    #[test]
    fn tall_image_caps_height_and_scales_width() {
        assert_eq!(bounded_dimensions(200, 800), (100, 400));
    }

    #[test]
    fn small_image_keeps_its_dimensions() {
        assert_eq!(bounded_dimensions(300, 120), (300, 120));
        assert_eq!(bounded_dimensions(MAX_EDGE_PX, MAX_EDGE_PX), (400, 400));
    }

    #[test]
    fn extreme_aspect_ratio_never_collapses_to_zero() {
        assert_eq!(bounded_dimensions(100_000, 10), (400, 1));
    }

    #[test]
    fn mime_check_is_case_insensitive_and_prefix_based() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime(" IMAGE/JPEG "));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime(""));
    }
}
