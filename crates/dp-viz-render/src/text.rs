use crate::primitives::{FontWeight, TextStyle};

#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
}

/// Approximate advance of `ch` in ems for a proportional sans-serif face.
fn advance_em(ch: char) -> f64 {
    match ch {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' => 0.28,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | ' ' | '-' => 0.36,
        'm' | 'w' | 'M' | 'W' => 0.86,
        '0'..='9' => 0.56,
        c if c.is_ascii_uppercase() => 0.68,
        _ => 0.55,
    }
}

/// Measure text width and height in points.
///
/// No font file is parsed; widths come from a per-glyph-class table, which
/// is close enough for margin and legend layout.
pub fn measure_text(text: &str, size_pt: f64, weight: FontWeight) -> TextMetrics {
    let bold = if weight == FontWeight::Bold { 1.07 } else { 1.0 };
    let width = text.chars().map(advance_em).sum::<f64>() * size_pt * bold;
    let ascent = 0.78 * size_pt;
    let descent = 0.22 * size_pt;
    TextMetrics { width, height: ascent + descent, ascent }
}

/// Measure text with a TextStyle.
pub fn measure_styled(text: &str, style: &TextStyle) -> TextMetrics {
    measure_text(text, style.size, style.weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_hello() {
        let m = measure_text("Hello", 12.0, FontWeight::Regular);
        assert!(m.width > 20.0);
        assert!(m.height > 8.0);
        assert!(m.ascent > 0.0);
    }

    #[test]
    fn bold_wider_than_regular() {
        let r = measure_text("Test", 12.0, FontWeight::Regular);
        let b = measure_text("Test", 12.0, FontWeight::Bold);
        assert!(b.width > r.width);
    }

    #[test]
    fn scales_with_size() {
        let style = TextStyle { size: 20.0, ..Default::default() };
        let big = measure_styled("0.25", &style);
        let small = measure_text("0.25", 10.0, FontWeight::Regular);
        assert!((big.width - 2.0 * small.width).abs() < 1e-9);
        assert_eq!(measure_text("", 10.0, FontWeight::Regular).width, 0.0);
    }
}
