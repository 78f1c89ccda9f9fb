//! DOCX writer. One Word paragraph per layout block; spacers become empty
//! paragraphs so blank lines survive a round trip through Word.

use std::io::Cursor;

use docx_rs::{Docx, PageMargin, Paragraph, Run, RunFonts};

use super::{layout_blocks, Block, RenderError};

/// 1 inch in twentieths of a point.
const MARGIN_TWIPS: i32 = 1440;
const FONT_NAME: &str = "Arial";
/// 11pt, expressed in half-points.
const FONT_SIZE_HALF_PT: usize = 22;

pub fn render_docx(text: &str) -> Result<Vec<u8>, RenderError> {
    let mut doc = Docx::new().page_margin(
        PageMargin::new()
            .top(MARGIN_TWIPS)
            .bottom(MARGIN_TWIPS)
            .left(MARGIN_TWIPS)
            .right(MARGIN_TWIPS),
    );

    for block in layout_blocks(text) {
        let paragraph = match block {
            Block::Paragraph(line) => Paragraph::new().add_run(
                Run::new()
                    .add_text(line)
                    .size(FONT_SIZE_HALF_PT)
                    .fonts(RunFonts::new().ascii(FONT_NAME).hi_ansi(FONT_NAME)),
            ),
            Block::Spacer => Paragraph::new(),
        };
        doc = doc.add_paragraph(paragraph);
    }

    let mut cursor = Cursor::new(Vec::new());
    doc.build()
        .pack(&mut cursor)
        .map_err(|e| RenderError::Docx(e.to_string()))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{DocumentChild, ParagraphChild, RunChild};

    fn read_back(bytes: &[u8]) -> Vec<String> {
        let doc = docx_rs::read_docx(bytes).unwrap();
        doc.document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(
                    p.children
                        .iter()
                        .filter_map(|c| match c {
                            ParagraphChild::Run(run) => Some(
                                run.children
                                    .iter()
                                    .filter_map(|rc| match rc {
                                        RunChild::Text(t) => Some(t.text.clone()),
                                        _ => None,
                                    })
                                    .collect::<String>(),
                            ),
                            _ => None,
                        })
                        .collect::<String>(),
                ),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_one_paragraph_per_source_line() {
        let bytes = render_docx("Dear Hiring Manager,\n\nI build backends.\n\nRegards").unwrap();
        assert!(bytes.starts_with(b"PK"));

        let paragraphs = read_back(&bytes);
        assert_eq!(
            paragraphs,
            vec!["Dear Hiring Manager,", "", "I build backends.", "", "Regards"]
        );
    }

    #[test]
    fn test_whitespace_only_lines_become_empty_paragraphs() {
        let paragraphs = read_back(&render_docx("A\n   \n\t\nB").unwrap());
        assert_eq!(paragraphs, vec!["A", "", "", "B"]);
    }

    #[test]
    fn test_empty_text_still_produces_a_document() {
        let bytes = render_docx("").unwrap();
        assert_eq!(read_back(&bytes), vec![""]);
    }
}
