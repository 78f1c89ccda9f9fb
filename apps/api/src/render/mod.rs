// Document export: plain text → txt / docx / pdf bytes.
// DOCX and PDF share one layout plan so both honour the same paragraph and
// blank-line structure. Rendering is CPU-bound; handlers run it via spawn_blocking.

pub mod docx;
pub mod font_metrics;
pub mod handlers;
pub mod pdf;

use std::str::FromStr;

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unsupported format")]
    UnsupportedFormat(String),

    #[error("Error generating DOCX: {0}")]
    Docx(String),

    #[error("Error generating PDF: {0}")]
    Pdf(String),
}

/// Export formats, keyed by the `/download/:format` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Txt,
    Docx,
    Pdf,
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" => Ok(OutputFormat::Txt),
            "docx" => Ok(OutputFormat::Docx),
            "pdf" => Ok(OutputFormat::Pdf),
            other => Err(RenderError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Docx => "docx",
            OutputFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Txt => "text/plain",
            OutputFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            OutputFormat::Pdf => "application/pdf",
        }
    }
}

/// A rendered download. Built on demand, never cached.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub filename: String,
}

/// One unit of the shared layout plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// A non-blank source line, untrimmed (trailing `\r` removed).
    Paragraph(&'a str),
    /// A blank or whitespace-only source line.
    Spacer,
}

/// Splits on `\n`; one block per source line, never merged.
pub fn layout_blocks(text: &str) -> Vec<Block<'_>> {
    text.split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.trim().is_empty() {
                Block::Spacer
            } else {
                Block::Paragraph(line)
            }
        })
        .collect()
}

/// `cover_letter_<YYYYMMDD_HHMMSS>.<ext>` from the render-time timestamp.
pub fn download_filename(format: OutputFormat, rendered_at: NaiveDateTime) -> String {
    format!(
        "cover_letter_{}.{}",
        rendered_at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Renders `text` into `format`.
pub fn render(
    text: &str,
    format: OutputFormat,
    rendered_at: NaiveDateTime,
) -> Result<RenderedFile, RenderError> {
    let bytes = match format {
        OutputFormat::Txt => text.as_bytes().to_vec(),
        OutputFormat::Docx => docx::render_docx(text)?,
        OutputFormat::Pdf => pdf::render_pdf(text)?,
    };

    Ok(RenderedFile {
        bytes,
        mime_type: format.mime_type(),
        filename: download_filename(format, rendered_at),
    })
}
