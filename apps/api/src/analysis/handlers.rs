//! Axum route handlers for the Analyze and Rewrite APIs.

use axum::{http::HeaderMap, Json};
use serde_json::Map;
use tracing::info;

use crate::analysis::models::{
    AnalyzeRequest, AnalyzeResponse, GapReport, KeywordMap, RewriteRequest, RewriteResponse,
    ScoreBreakdown,
};
use crate::errors::AppError;

pub const LLM_API_KEY_HEADER: &str = "x-llm-api-key";

/// Presence check only; the key is forwarded to no one yet.
fn require_llm_api_key(headers: &HeaderMap) -> Result<(), AppError> {
    match headers.get(LLM_API_KEY_HEADER) {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(AppError::Unauthorized(format!(
            "{LLM_API_KEY_HEADER} header required"
        ))),
    }
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    headers: HeaderMap,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    require_llm_api_key(&headers)?;
    info!(
        provider = %request.provider,
        model = request.model.as_deref().unwrap_or("default"),
        job_chars = request.job_text.len(),
        resume_chars = request.resume_text.len(),
        "Analyze requested"
    );

    Ok(Json(AnalyzeResponse {
        scores: ScoreBreakdown::default(),
        gaps: GapReport::default(),
        recommendations: Vec::new(),
        keyword_map: KeywordMap::default(),
        rewrites: None,
    }))
}

/// POST /api/v1/rewrite
pub async fn handle_rewrite(
    headers: HeaderMap,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResponse>, AppError> {
    require_llm_api_key(&headers)?;
    info!(
        target_role = request.target_role.as_deref().unwrap_or("unspecified"),
        job_chars = request.job_text.len(),
        resume_fields = request.resume_structured.len(),
        "Rewrite requested"
    );

    Ok(Json(RewriteResponse {
        revised_markdown: String::new(),
        revised_structured: Map::new(),
    }))
}
