//! PDF writer on US letter using the built-in Helvetica face.
//!
//! Layout is computed first as a list of pages of positioned lines, then
//! drawn with printpdf. Paragraphs wrap at the text width and flow onto new
//! pages when the bottom margin is reached.

use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

use super::font_metrics::{letter_layout, PageLayout, HELVETICA};
use super::{layout_blocks, Block, RenderError};

/// A wrapped line with its baseline position, in points from the page's
/// bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
struct PlacedLine {
    text: String,
    x_pt: f32,
    baseline_pt: f32,
}

/// Lays `text` out into pages. Always returns at least one (possibly empty) page.
fn paginate(text: &str, layout: &PageLayout) -> Vec<Vec<PlacedLine>> {
    let top = layout.page_height_pt - layout.margin_pt;
    let bottom = layout.margin_pt;
    let max_width_em = layout.text_width_em();

    let mut pages = vec![Vec::new()];
    let mut cursor = top;

    for block in layout_blocks(text) {
        match block {
            Block::Spacer => cursor -= layout.spacer_pt,
            Block::Paragraph(line) => {
                for wrapped in HELVETICA.wrap(line, max_width_em) {
                    let mut baseline = cursor - layout.leading_pt;
                    if baseline < bottom {
                        pages.push(Vec::new());
                        cursor = top;
                        baseline = cursor - layout.leading_pt;
                    }
                    if let Some(page) = pages.last_mut() {
                        page.push(PlacedLine {
                            text: wrapped,
                            x_pt: layout.margin_pt,
                            baseline_pt: baseline,
                        });
                    }
                    cursor = baseline;
                }
                cursor -= layout.space_after_pt;
            }
        }
    }

    pages
}

pub fn render_pdf(text: &str) -> Result<Vec<u8>, RenderError> {
    let layout = letter_layout();
    let width = Mm::from(Pt(layout.page_width_pt));
    let height = Mm::from(Pt(layout.page_height_pt));

    let (doc, first_page, first_layer) = PdfDocument::new("Cover Letter", width, height, "Text");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    for (index, lines) in paginate(text, &layout).into_iter().enumerate() {
        let (page, layer) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, "Text")
        };
        let layer = doc.get_page(page).get_layer(layer);

        for line in lines {
            layer.use_text(
                line.text,
                layout.font_size_pt,
                Mm::from(Pt(line.x_pt)),
                Mm::from(Pt(line.baseline_pt)),
                &font,
            );
        }
    }

    doc.save_to_bytes()
        .map_err(|e| RenderError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_a_pdf() {
        let bytes = render_pdf("Dear Hiring Manager,\n\nThanks.").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_text_renders_one_blank_page() {
        let pages = paginate("", &letter_layout());
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
        assert!(render_pdf("").unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_lines_stay_inside_margins() {
        let layout = letter_layout();
        let text = "word ".repeat(400);
        for page in paginate(&text, &layout) {
            for line in page {
                assert!(line.baseline_pt >= layout.margin_pt);
                assert!(line.baseline_pt <= layout.page_height_pt - layout.margin_pt);
                assert!(HELVETICA.measure_str(&line.text) <= layout.text_width_em());
            }
        }
    }

    #[test]
    fn test_spacer_pushes_next_paragraph_down() {
        let layout = letter_layout();
        let tight = paginate("A\nB", &layout);
        let spaced = paginate("A\n\nB", &layout);

        let gap = |pages: &[Vec<PlacedLine>]| pages[0][0].baseline_pt - pages[0][1].baseline_pt;
        assert!((gap(&tight) - (layout.leading_pt + layout.space_after_pt)).abs() < 1e-3);
        assert!((gap(&spaced) - gap(&tight) - layout.spacer_pt).abs() < 1e-3);
    }

    #[test]
    fn test_long_text_flows_onto_new_pages() {
        let layout = letter_layout();
        let text = (1..=120)
            .map(|i| format!("Paragraph {i} of a very long letter."))
            .collect::<Vec<_>>()
            .join("\n");
        let pages = paginate(&text, &layout);

        assert!(pages.len() >= 3, "got {} pages", pages.len());
        let total: usize = pages.iter().map(Vec::len).sum();
        assert_eq!(total, 120);
        assert_eq!(pages[1][0].baseline_pt, layout.page_height_pt - layout.margin_pt - layout.leading_pt);

        assert!(render_pdf(&text).unwrap().starts_with(b"%PDF"));
    }
}
