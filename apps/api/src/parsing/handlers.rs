//! Axum route handler for the Parse API.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::parsing::{parse_input, DetectedFormat};

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: Option<String>,
    pub file_name: Option<String>,
    pub file_bytes_base64: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub normalized_text: String,
    pub detected_format: DetectedFormat,
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}

/// POST /api/v1/parse
///
/// Normalizes raw text or a base64 document. Extraction is CPU-bound and runs
/// on the blocking pool.
pub async fn handle_parse(
    Json(request): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    if is_blank(&request.text) && is_blank(&request.file_bytes_base64) {
        return Err(AppError::Validation(
            "text or file_bytes_base64 is required".to_string(),
        ));
    }

    let document = tokio::task::spawn_blocking(move || {
        parse_input(
            request.text.as_deref(),
            request.file_name.as_deref(),
            request.file_bytes_base64.as_deref(),
        )
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("parse task failed: {e}")))??;

    info!(
        format = %document.detected_format,
        chars = document.normalized_text.len(),
        "Parsed input"
    );

    Ok(Json(ParseResponse {
        normalized_text: document.normalized_text,
        detected_format: document.detected_format,
    }))
}
