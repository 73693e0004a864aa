use std::any::Any;
use std::panic;
use std::thread;

use pdf_extract::OutputError;
use tracing::debug;

use super::normalize::normalize_text;
use super::ParseError;

type ExtractOutcome = thread::Result<Result<Vec<String>, OutputError>>;

/// Extracts page text in document order and normalizes the concatenation.
///
/// `pdf-extract` is known to panic on some malformed content streams, so the
/// call is isolated with `catch_unwind` and reported as an unexpected fault.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ParseError> {
    let outcome = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes));
    let pages = classify_outcome(outcome)?;

    debug!(pages = pages.len(), "Extracted PDF pages");
    Ok(join_pages(&pages))
}

/// Structural `lopdf` failures are corrupt input; everything else is unexpected.
fn classify_outcome(outcome: ExtractOutcome) -> Result<Vec<String>, ParseError> {
    match outcome {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(OutputError::PdfError(e))) => Err(ParseError::Pdf {
            detail: e.to_string(),
        }),
        Ok(Err(e)) => Err(ParseError::PdfUnexpected {
            detail: e.to_string(),
        }),
        Err(payload) => Err(ParseError::PdfUnexpected {
            detail: panic_message(payload.as_ref()),
        }),
    }
}

/// `pdf-extract` prefixes every page with layout newlines, and blank pages
/// come back as whitespace. Pages are trimmed first, then blanks are dropped.
fn join_pages(pages: &[String]) -> String {
    let parts: Vec<&str> = pages
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    normalize_text(&parts.join("\n"))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "pdf extractor panicked".to_string()
    }
}
