//! Analyze handlers — the HTTP boundary in front of the analysis core.
//!
//! The upload handler mirrors the hardening rules of the original service:
//! extension allow-list, size cap, and empty-file rejection all happen here;
//! the core itself never fails on content.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::analysis::report::Report;
use crate::errors::AppError;
use crate::extract::{extract_text, ALLOWED_EXTENSIONS};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

/// POST /api/v1/analyze
/// Multipart upload with a `file` field; returns the analysis report.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Report>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .ok_or_else(|| AppError::Validation("Empty filename".to_string()))?
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, data.to_vec()));
            break;
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("Empty filename".to_string()));
    }
    if data.is_empty() {
        return Err(AppError::Validation("Empty file".to_string()));
    }
    if data.len() > state.config.max_upload_bytes() {
        return Err(AppError::Validation(format!(
            "File exceeds the {} MB upload limit",
            state.config.max_upload_mb
        )));
    }

    let ext = file_extension(&filename)
        .ok_or_else(|| AppError::UnsupportedFileType(filename.clone()))?;
    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::UnsupportedFileType(ext));
    }

    let text = extract_text(&data, &ext)?;
    info!(
        "Analyzing upload '{}' ({} bytes, {} chars of text)",
        filename,
        data.len(),
        text.chars().count()
    );

    let report = state.analyzer.analyze(&text).await;
    Ok(Json(report))
}

/// POST /api/v1/analyze/text
/// Feeds already-extracted text straight into the pipeline.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<Report>, AppError> {
    let report = state.analyzer.analyze(&req.text).await;
    Ok(Json(report))
}

/// Lowercased extension after the final dot, or `None` when there is no dot.
fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
}
