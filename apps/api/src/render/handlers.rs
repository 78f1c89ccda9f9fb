use axum::{
    extract::{rejection::JsonRejection, Path},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::render::{render, OutputFormat};

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// POST /download/:format
///
/// Text is checked before the format, so an empty body on an unknown format
/// reports "No text provided".
pub async fn handle_download(
    Path(format): Path<String>,
    body: Result<Json<DownloadRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = body.map_err(|e| AppError::Validation(e.body_text()))?;

    let text = match req.text {
        Some(text) if !text.is_empty() => text,
        _ => return Err(AppError::Validation("No text provided".to_string())),
    };
    let format: OutputFormat = format.parse()?;

    let rendered_at = chrono::Local::now().naive_local();
    let file = tokio::task::spawn_blocking(move || render(&text, format, rendered_at))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    info!("Rendered {} ({} bytes)", file.filename, file.bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, file.mime_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        file.bytes,
    )
        .into_response())
}
