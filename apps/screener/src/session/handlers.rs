//! Axum route handlers for session lifecycle and résumé upload.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::document::extract_pdf_text;
use crate::errors::AppError;
use crate::models::resume::{ResumeSet, UploadedFile};
use crate::screening::render::upload_message;
use crate::session::SessionSummary;
use crate::state::AppState;

/// Multipart field carrying résumé files.
const RESUME_FIELD: &str = "resumes";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Number of files received, including any that shared a name.
    pub uploaded: usize,
    pub message: String,
    pub resumes: Vec<String>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionSummary>) {
    let summary = state.sessions.create().await;
    info!("Session {} created", summary.session_id);
    (StatusCode::CREATED, Json(summary))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSummary>, AppError> {
    Ok(Json(state.sessions.get(id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    info!("Session {id} ended");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/resumes
///
/// Replaces the session's résumés with the uploaded PDFs. Every file is
/// extracted before the session changes, so a bad file leaves the previous
/// upload in place.
pub async fn handle_upload_resumes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    // Fail fast on an unknown session before reading the body.
    state.sessions.get(id).await?;

    let files = read_resume_files(multipart, state.config.max_upload_bytes).await?;
    if files.is_empty() {
        return Err(AppError::MissingInput("No file uploaded".to_string()));
    }

    let mut resumes = ResumeSet::new();
    for file in &files {
        let text = extract_pdf_text(Some(file)).await?;
        resumes.insert(file.name.as_str(), text);
    }

    let names = resumes.names();
    state.sessions.replace_resumes(id, resumes).await?;
    info!("Session {id}: {} PDF(s) uploaded", files.len());

    Ok(Json(UploadResponse {
        uploaded: files.len(),
        message: upload_message(files.len()),
        resumes: names,
    }))
}

/// DELETE /api/v1/sessions/:id/resumes
///
/// Drops the uploaded résumés; actions fail with `MissingInput` until the
/// next upload.
pub async fn handle_clear_resumes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.clear_resumes(id).await?;
    info!("Session {id}: resumes cleared");
    Ok(StatusCode::NO_CONTENT)
}

async fn read_resume_files(
    mut multipart: Multipart,
    max_upload_bytes: usize,
) -> Result<Vec<UploadedFile>, AppError> {
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded file has no filename".to_string()))?;
        if !is_pdf_name(&name) {
            return Err(AppError::Validation(format!(
                "'{name}' is not a PDF. Only .pdf files are accepted"
            )));
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read '{name}': {e}")))?;
        if bytes.len() > max_upload_bytes {
            return Err(AppError::Validation(format!(
                "'{name}' is too large. Maximum size is {max_upload_bytes} bytes"
            )));
        }
        files.push(UploadedFile { name, bytes });
    }
    Ok(files)
}

fn is_pdf_name(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
