// Document Normalizer
// Turns raw text, PDF bytes or DOCX bytes into canonical plain text plus a format label.
// Pure and synchronous: handlers must run `parse_input` inside tokio::task::spawn_blocking.

pub mod docx;
pub mod format;
pub mod handlers;
pub mod normalize;
pub mod pdf;

#[cfg(test)]
pub(crate) mod test_support;

use base64::engine::general_purpose::STANDARD;
use base64::{DecodeError, Engine as _};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub use format::{detect_format, DetectedFormat};
pub use normalize::normalize_text;

/// Extraction failure for a recognized document type.
///
/// The display messages are stable and returned to clients verbatim; `detail`
/// carries the underlying cause for logs only.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse PDF")]
    Pdf { detail: String },

    #[error("Unexpected error while parsing PDF")]
    PdfUnexpected { detail: String },

    #[error("Failed to parse DOCX")]
    Docx { detail: String },
}

impl ParseError {
    pub fn detail(&self) -> &str {
        match self {
            ParseError::Pdf { detail }
            | ParseError::PdfUnexpected { detail }
            | ParseError::Docx { detail } => detail,
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseInputError {
    #[error("Invalid base64 payload: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedDocument {
    pub normalized_text: String,
    pub detected_format: DetectedFormat,
}

impl NormalizedDocument {
    fn empty(detected_format: DetectedFormat) -> Self {
        Self {
            normalized_text: String::new(),
            detected_format,
        }
    }
}

/// Decodes a standard base64 payload. ASCII whitespace from line-wrapped
/// encoders is ignored; anything else outside the alphabet is rejected.
pub fn decode_payload(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD.decode(compact)
}

pub fn parse_text(text: &str) -> NormalizedDocument {
    NormalizedDocument {
        normalized_text: normalize_text(text),
        detected_format: DetectedFormat::Text,
    }
}

pub fn parse_pdf(bytes: &[u8]) -> Result<NormalizedDocument, ParseError> {
    Ok(NormalizedDocument {
        normalized_text: pdf::extract_pdf_text(bytes)?,
        detected_format: DetectedFormat::Pdf,
    })
}

pub fn parse_docx(bytes: &[u8]) -> Result<NormalizedDocument, ParseError> {
    Ok(NormalizedDocument {
        normalized_text: docx::extract_docx_text(bytes)?,
        detected_format: DetectedFormat::Docx,
    })
}

/// Single entry point for all inputs. First matching rule wins:
///
/// 1. non-empty `text` → normalized text, format `text` (file name ignored)
/// 2. non-empty payload → decode, classify by file name, extract pdf/docx;
///    any other format yields empty text without extraction
/// 3. neither → empty text, format from the file name alone
pub fn parse_input(
    text: Option<&str>,
    file_name: Option<&str>,
    file_bytes_base64: Option<&str>,
) -> Result<NormalizedDocument, ParseInputError> {
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        return Ok(parse_text(text));
    }

    let Some(encoded) = file_bytes_base64.filter(|b| !b.is_empty()) else {
        return Ok(NormalizedDocument::empty(detect_format(file_name, false)));
    };

    let bytes = decode_payload(encoded)?;
    let detected = detect_format(file_name, false);
    debug!(format = %detected, bytes = bytes.len(), "Decoded document payload");

    let document = match detected {
        DetectedFormat::Pdf => parse_pdf(&bytes)?,
        DetectedFormat::Docx => parse_docx(&bytes)?,
        DetectedFormat::Text | DetectedFormat::Binary => NormalizedDocument::empty(detected),
    };
    Ok(document)
}
