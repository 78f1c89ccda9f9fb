//! Axum route handlers for the Generation API.
//!
//! Each endpoint takes a multipart form where every input may arrive as a
//! `<name>_text` field or a `<name>_file` upload. Uploads win over text.

use std::collections::HashMap;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::DocumentKind;
use crate::ingest::extract_text_blocking;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub success: bool,
    pub cover_letter: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub success: bool,
    pub resume: String,
}

#[derive(Debug, Serialize)]
pub struct BothResponse {
    pub success: bool,
    pub cover_letter: String,
    pub resume: String,
}

#[derive(Debug)]
struct Upload {
    filename: String,
    bytes: Bytes,
}

/// Text fields and uploaded files collected from one multipart body.
#[derive(Debug, Default)]
pub struct FormInputs {
    texts: HashMap<String, String>,
    files: HashMap<String, Upload>,
}

impl FormInputs {
    pub async fn read(
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Self, AppError> {
        let mut multipart =
            multipart.map_err(|_| AppError::Validation("Invalid content type".to_string()))?;
        let mut inputs = FormInputs::default();

        while let Some(field) = multipart.next_field().await.map_err(invalid_body)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(filename) => {
                    let bytes = field.bytes().await.map_err(invalid_body)?;
                    // An empty <input type=file> still posts a part with no filename.
                    if !filename.is_empty() {
                        inputs.files.insert(name, Upload { filename, bytes });
                    }
                }
                None => {
                    let text = field.text().await.map_err(invalid_body)?;
                    inputs.texts.insert(name, text);
                }
            }
        }

        Ok(inputs)
    }

    /// Resolves one logical input: `<prefix>_file` (extracted) if uploaded,
    /// else `<prefix>_text`, else an empty string.
    pub async fn resolve(&mut self, prefix: &str) -> Result<String, AppError> {
        if let Some(upload) = self.files.remove(&format!("{prefix}_file")) {
            let text = extract_text_blocking(upload.bytes, upload.filename).await?;
            return Ok(text);
        }
        Ok(self
            .texts
            .remove(&format!("{prefix}_text"))
            .unwrap_or_default())
    }
}

fn invalid_body(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate
pub async fn handle_generate(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let mut form = FormInputs::read(multipart).await?;
    let example = form.resolve("example").await?;
    let job_description = form.resolve("job_description").await?;

    let cover_letter = state
        .generator
        .generate(DocumentKind::CoverLetter, &example, &job_description)
        .await?;

    Ok(Json(CoverLetterResponse {
        success: true,
        cover_letter,
    }))
}

/// POST /generate-resume
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeResponse>, AppError> {
    let mut form = FormInputs::read(multipart).await?;
    let example = form.resolve("example").await?;
    let job_description = form.resolve("job_description").await?;

    let resume = state
        .generator
        .generate(DocumentKind::Resume, &example, &job_description)
        .await?;

    Ok(Json(ResumeResponse {
        success: true,
        resume,
    }))
}

/// POST /generate-both
///
/// Sequential; a failure on the resume discards the cover letter.
pub async fn handle_generate_both(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<BothResponse>, AppError> {
    let mut form = FormInputs::read(multipart).await?;
    let cover_letter = form.resolve("cover_letter").await?;
    let resume = form.resolve("resume").await?;
    let job_description = form.resolve("job_description").await?;

    let pair = state
        .generator
        .generate_both(&cover_letter, &resume, &job_description)
        .await?;

    Ok(Json(BothResponse {
        success: true,
        cover_letter: pair.cover_letter,
        resume: pair.resume,
    }))
}
