//! Text measurement and wrapping.

use egui::{Align2, Color32, FontId, Painter, Pos2};

/// Anything that can tell how wide a run of text renders
pub trait TextMeasure {
    fn width(&self, text: &str) -> f32;
}

/// Measures with egui's font system
pub struct EguiMeasure<'a> {
    painter: &'a Painter,
    font: FontId,
}

impl<'a> EguiMeasure<'a> {
    pub fn new(painter: &'a Painter, font: FontId) -> Self {
        Self { painter, font }
    }
}

impl TextMeasure for EguiMeasure<'_> {
    fn width(&self, text: &str) -> f32 {
        self.painter
            .layout_no_wrap(text.to_owned(), self.font.clone(), Color32::WHITE)
            .size()
            .x
    }
}

/// Greedy word wrap on single spaces. A word wider than `max_width` gets a
/// line of its own rather than being split.
pub fn wrap_text(text: &str, max_width: f32, measure: &impl TextMeasure) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split(' ') {
        current.push(word);
        if current.len() > 1 && measure.width(&current.join(" ")) > max_width {
            current.pop();
            lines.push(current.join(" "));
            current = vec![word];
        }
    }
    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

/// Wrap `text` to the screen width less the margin and draw each line
/// horizontally centered, starting at `top`. Returns the y below the last line.
pub fn draw_wrapped_centered(
    painter: &Painter,
    text: &str,
    center_x: f32,
    top: f32,
    max_width: f32,
    line_height: f32,
    font: FontId,
    color: Color32,
) -> f32 {
    let lines = wrap_text(text, max_width, &EguiMeasure::new(painter, font.clone()));
    let mut y = top;
    for line in lines {
        painter.text(Pos2::new(center_x, y), Align2::CENTER_TOP, line, font.clone(), color);
        y += line_height;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is 10 units wide
    struct FixedAdvance;

    impl TextMeasure for FixedAdvance {
        fn width(&self, text: &str) -> f32 {
            text.chars().count() as f32 * 10.0
        }
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        assert_eq!(wrap_text("Press SPACE", 200.0, &FixedAdvance), ["Press SPACE"]);
    }

    #[test]
    fn test_wraps_at_word_boundaries() {
        let lines = wrap_text("Press SPACE to begin your dark journey", 150.0, &FixedAdvance);
        assert_eq!(lines, ["Press SPACE to", "begin your dark", "journey"]);
        for line in &lines {
            assert!(FixedAdvance.width(line) <= 150.0);
        }
    }

    #[test]
    fn test_exact_fit_is_not_wrapped() {
        // "abcd efgh" is exactly 90 units
        assert_eq!(wrap_text("abcd efgh", 90.0, &FixedAdvance), ["abcd efgh"]);
    }

    #[test]
    fn test_overlong_word_gets_its_own_line() {
        let lines = wrap_text("Bloodsoakedness is eternal", 50.0, &FixedAdvance);
        assert_eq!(lines, ["Bloodsoakedness", "is", "eternal"]);
    }

    #[test]
    fn test_leading_overlong_word_has_no_empty_line() {
        let lines = wrap_text("Bloodsoakedness", 50.0, &FixedAdvance);
        assert_eq!(lines, ["Bloodsoakedness"]);
    }

    #[test]
    fn test_words_are_never_lost() {
        let text = "Are you happy with your Shadowborn? (Y) Yes  (N) No";
        let lines = wrap_text(text, 120.0, &FixedAdvance);
        assert_eq!(lines.join(" "), text);
    }
}
