//! Axum route handlers for the Analytics API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analytics::{analyze_keywords, analyze_with, AnalysisResult, KeywordReport};
use crate::errors::AppError;
use crate::models::lenient;
use crate::models::resume::{ResumeData, ResumeFields};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub resume: ResumeData,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
}

#[derive(Debug, Deserialize)]
pub struct KeywordRequest {
    #[serde(default)]
    pub job_description: String,
    /// Any resume rendering: plain text or a serialized record.
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordResponse {
    pub report: KeywordReport,
}

fn ensure_within_limit(chars: usize, limit: usize) -> Result<(), AppError> {
    if chars > limit {
        return Err(AppError::Validation(format!(
            "input is {chars} characters; the limit is {limit}"
        )));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analytics
///
/// Full writing-quality and job-match analysis of a resume.
/// An empty job description is valid and yields zero keyword coverage.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    let fields = ResumeFields::from(&request.resume);

    ensure_within_limit(
        fields.char_len() + request.job_description.chars().count(),
        state.config.max_input_chars,
    )?;

    // Large resumes take real CPU time; keep it off the async executor.
    let options = state.config.analysis.clone();
    let job_description = request.job_description;
    let analysis = tokio::task::spawn_blocking(move || {
        analyze_with(&fields, &job_description, &options)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))?;

    tracing::debug!(
        completeness = analysis.completeness.completeness_percent,
        missing_keywords = analysis.missing_keywords.len(),
        "analytics request served"
    );

    Ok(Json(AnalyzeResponse { analysis }))
}

/// POST /api/v1/analytics/keywords
///
/// Keyword gap report only; the resume may be any text.
pub async fn handle_keywords(
    State(state): State<AppState>,
    payload: Result<Json<KeywordRequest>, JsonRejection>,
) -> Result<Json<KeywordResponse>, AppError> {
    let Json(request) = payload?;

    ensure_within_limit(
        request.job_description.chars().count() + request.resume_text.chars().count(),
        state.config.max_input_chars,
    )?;

    let report = analyze_keywords(
        &request.job_description,
        &request.resume_text,
        state.config.analysis.suggestion_keywords,
    );

    Ok(Json(KeywordResponse { report }))
}
