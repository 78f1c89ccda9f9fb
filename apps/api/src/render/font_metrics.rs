//! Static glyph-width table for Helvetica, used to word-wrap PDF paragraphs.
//!
//! Widths are in em units (AFM width / 1000) for ASCII 0x20..=0x7E.
//! Index = (char as usize) - 32. Anything outside that range falls back to
//! `average_char_width`.

// ────────────────────────────────────────────────────────────────────────────
// Page layout
// ────────────────────────────────────────────────────────────────────────────

/// Fixed layout for exported PDFs: US letter, 1" margins, Helvetica 11/14.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_pt: f32,
    pub font_size_pt: f32,
    /// Baseline-to-baseline distance.
    pub leading_pt: f32,
    /// Gap after every paragraph block.
    pub space_after_pt: f32,
    /// Height of the gap emitted for a blank source line.
    pub spacer_pt: f32,
}

impl PageLayout {
    pub fn text_width_pt(&self) -> f32 {
        self.page_width_pt - 2.0 * self.margin_pt
    }

    /// Usable text width in em units at the configured font size.
    pub fn text_width_em(&self) -> f32 {
        self.text_width_pt() / self.font_size_pt
    }
}

/// US letter (8.5" × 11"), 72pt margins, 11pt text on 14pt leading,
/// 12pt after each paragraph, 0.2" spacers.
pub fn letter_layout() -> PageLayout {
    PageLayout {
        page_width_pt: 612.0,
        page_height_pt: 792.0,
        margin_pt: 72.0,
        font_size_pt: 11.0,
        leading_pt: 14.0,
        space_after_pt: 12.0,
        spacer_pt: 0.2 * 72.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

pub struct FontMetricTable {
    widths: [f32; 95],
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Greedy word-wrap at `max_width_em`. Runs of whitespace collapse to a
    /// single space. A word wider than the line gets a line of its own.
    pub fn wrap(&self, s: &str, max_width_em: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in s.split_whitespace() {
            let word_w = self.measure_str(word);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + self.space_width + word_w > max_width_em {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += self.space_width + word_w;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

/// Helvetica (PDF base-14), from the Adobe AFM.
pub static HELVETICA: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.556,
    space_width: 0.278,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(HELVETICA.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = HELVETICA.measure_str("Rust");
        assert!((width - 2.056).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let width = HELVETICA.measure_str("é");
        assert!((width - HELVETICA.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_letter_layout_text_width() {
        let layout = letter_layout();
        assert!((layout.text_width_pt() - 468.0).abs() < 1e-3);
        assert!((layout.spacer_pt - 14.4).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_short_line_is_single_line() {
        let lines = HELVETICA.wrap("Line one", letter_layout().text_width_em());
        assert_eq!(lines, vec!["Line one".to_string()]);
    }

    #[test]
    fn test_wrap_long_line_keeps_every_word_within_width() {
        let layout = letter_layout();
        let text = "I am writing to express my strong interest in the position described in \
                    your job posting. Based on my background and experience, I believe I would \
                    be an excellent fit for this role.";
        let lines = HELVETICA.wrap(text, layout.text_width_em());

        assert!(lines.len() >= 2, "expected wrapping, got {lines:?}");
        for line in &lines {
            assert!(HELVETICA.measure_str(line) <= layout.text_width_em());
        }
        assert_eq!(
            lines.join(" "),
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        );
    }

    #[test]
    fn test_wrap_oversized_word_gets_its_own_line() {
        let word = "x".repeat(200);
        let lines = HELVETICA.wrap(&format!("a {word} b"), 10.0);
        assert_eq!(lines, vec!["a".to_string(), word, "b".to_string()]);
    }

    #[test]
    fn test_wrap_blank_input_yields_no_lines() {
        assert!(HELVETICA.wrap("   \t ", 42.0).is_empty());
    }
}
