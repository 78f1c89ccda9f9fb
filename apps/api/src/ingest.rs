//! Text extraction for uploaded documents.
//!
//! Dispatches on the filename suffix only; the bytes are never sniffed.
//! `.doc` is routed to the DOCX reader, so legacy binary Word files fail
//! with an extraction error rather than being rejected up front.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Error reading PDF: {0}")]
    Pdf(String),

    #[error("Error reading DOCX: {0}")]
    Docx(String),

    #[error("Error reading TXT: {0}")]
    Txt(#[from] std::string::FromUtf8Error),

    #[error("Error reading {0}: parser aborted")]
    Aborted(String),
}

/// Input formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Pdf,
    Docx,
    Txt,
}

impl SourceFormat {
    /// Resolves the format from a filename suffix, case-insensitively.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(SourceFormat::Pdf)
        } else if lower.ends_with(".doc") || lower.ends_with(".docx") {
            Some(SourceFormat::Docx)
        } else if lower.ends_with(".txt") {
            Some(SourceFormat::Txt)
        } else {
            None
        }
    }
}

/// Converts an uploaded file into plain text.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    let format = SourceFormat::from_filename(filename)
        .ok_or_else(|| ExtractError::UnsupportedFileType(filename.to_string()))?;

    debug!("Extracting {format:?} text from {filename} ({} bytes)", bytes.len());

    match format {
        SourceFormat::Pdf => extract_pdf(bytes),
        SourceFormat::Docx => extract_docx(bytes),
        SourceFormat::Txt => Ok(String::from_utf8(bytes.to_vec())?),
    }
}

/// Runs [`extract_text`] on the blocking pool. PDF and DOCX parsing is
/// CPU-bound, and a parser panic surfaces here as `ExtractError::Aborted`.
pub async fn extract_text_blocking(bytes: Bytes, filename: String) -> Result<String, ExtractError> {
    let name = filename.clone();
    tokio::task::spawn_blocking(move || extract_text(&bytes, &filename))
        .await
        .map_err(|_| ExtractError::Aborted(name))?
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    let mut text = String::new();
    for page in pages {
        text.push_str(&page);
        text.push('\n');
    }
    Ok(text.trim().to_string())
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n").trim().to_string())
}

/// Paragraph → Run → Text. Runs in one paragraph are concatenated with no
/// separator; runs nested in hyperlinks are included.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    push_runs(&para.children, &mut text);
    text
}

fn push_runs(children: &[docx_rs::ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        docx_rs::RunChild::Text(t) => text.push_str(&t.text),
                        docx_rs::RunChild::Tab(_) => text.push('\t'),
                        docx_rs::RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(link) => push_runs(&link.children, text),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn docx_bytes(lines: &[&str]) -> Vec<u8> {
        let mut doc = docx_rs::Docx::new();
        for line in lines {
            let para = if line.is_empty() {
                docx_rs::Paragraph::new()
            } else {
                docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(*line))
            };
            doc = doc.add_paragraph(para);
        }
        let mut cursor = Cursor::new(Vec::new());
        doc.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_format_dispatch_is_case_insensitive() {
        assert_eq!(SourceFormat::from_filename("CV.PDF"), Some(SourceFormat::Pdf));
        assert_eq!(SourceFormat::from_filename("letter.Docx"), Some(SourceFormat::Docx));
        assert_eq!(SourceFormat::from_filename("old.doc"), Some(SourceFormat::Docx));
        assert_eq!(SourceFormat::from_filename("jd.TXT"), Some(SourceFormat::Txt));
        assert_eq!(SourceFormat::from_filename("notes.md"), None);
        assert_eq!(SourceFormat::from_filename("pdf"), None);
    }

    #[test]
    fn test_txt_is_decoded_verbatim() {
        let text = extract_text("  Dear team,\nThanks.\n".as_bytes(), "letter.txt").unwrap();
        assert_eq!(text, "  Dear team,\nThanks.\n");
    }

    #[test]
    fn test_unsupported_extension_names_the_file() {
        let err = extract_text(b"{\\rtf1}", "letter.rtf").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFileType(ref f) if f == "letter.rtf"));
        assert_eq!(err.to_string(), "Unsupported file type: letter.rtf");
    }

    #[test]
    fn test_invalid_utf8_txt_is_an_extraction_error() {
        let err = extract_text(&[0xff, 0xfe, 0x41], "jd.txt").unwrap_err();
        assert!(matches!(err, ExtractError::Txt(_)));
        assert!(err.to_string().starts_with("Error reading TXT"));
    }

    #[test]
    fn test_docx_paragraphs_joined_with_newlines() {
        let bytes = docx_bytes(&["Dear Hiring Manager,", "", "I build backends.", ""]);
        let text = extract_text(&bytes, "letter.docx").unwrap();
        assert_eq!(text, "Dear Hiring Manager,\n\nI build backends.");
    }

    #[test]
    fn test_docx_hyperlink_text_is_kept() {
        let para = docx_rs::Paragraph::new()
            .add_run(docx_rs::Run::new().add_text("Email: "))
            .add_hyperlink(
                docx_rs::Hyperlink::new("mailto:jane@example.com", docx_rs::HyperlinkType::External)
                    .add_run(docx_rs::Run::new().add_text("jane@example.com")),
            );
        let mut cursor = Cursor::new(Vec::new());
        docx_rs::Docx::new()
            .add_paragraph(para)
            .build()
            .pack(&mut cursor)
            .unwrap();

        let text = extract_text(&cursor.into_inner(), "cv.docx").unwrap();
        assert_eq!(text, "Email: jane@example.com");
    }

    #[test]
    fn test_corrupt_docx_is_an_extraction_error() {
        let err = extract_text(b"definitely not a zip archive", "letter.docx").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_an_extraction_error() {
        let result =
            extract_text_blocking(Bytes::from_static(b"not a pdf at all"), "cv.pdf".to_string())
                .await;
        let err = result.unwrap_err();
        assert!(
            matches!(err, ExtractError::Pdf(_) | ExtractError::Aborted(_)),
            "unexpected error: {err:?}"
        );
        assert!(!matches!(err, ExtractError::UnsupportedFileType(_)));
    }

    #[tokio::test]
    async fn test_rendered_pdf_extracts_to_trimmed_text() {
        let pdf = crate::render::pdf::render_pdf("Tailored\n\nLetter").unwrap();
        let text = extract_text_blocking(Bytes::from(pdf), "letter.pdf".to_string())
            .await
            .unwrap();
        assert!(text.contains("Tailored"), "extracted: {text:?}");
        assert_eq!(text, text.trim());
    }
}
