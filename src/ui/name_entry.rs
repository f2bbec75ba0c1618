//! Name entry screen.

use super::confirm_dialog::draw_confirm_dialog;
use super::effects::{blood_streaks, draw_blood_streaks, draw_revealed_text, prefix_width};
use super::style::colors;
use crate::constants::*;
use crate::creation::NameEntry;
use egui::{Align2, FontId, Painter, Pos2, Rect, Stroke, Vec2};

pub const HEADING: &str = "NAME YOUR SHADOWBORN";

/// Prompt under the input box
pub fn prompt(has_name: bool) -> &'static str {
    if has_name {
        "Press ENTER to confirm"
    } else {
        "Press ENTER to be named Rouge"
    }
}

/// Input box, centered horizontally with its top edge on the screen's middle
pub fn input_rect(screen: Rect) -> Rect {
    Rect::from_min_size(
        Pos2::new(screen.center().x - NAME_INPUT_WIDTH / 2.0, screen.center().y),
        Vec2::new(NAME_INPUT_WIDTH, NAME_INPUT_HEIGHT),
    )
}

pub fn draw_name_entry(painter: &Painter, rect: Rect, entry: &NameEntry) {
    if let Some(dialog) = entry.confirm_dialog() {
        draw_confirm_dialog(painter, rect, dialog);
        return;
    }

    painter.rect_filled(rect, 0.0, colors::NAME_ENTRY_BG);
    let streaks = blood_streaks(rect.width(), BLOOD_DRIP_INTENSITY, &mut rand::thread_rng());
    draw_blood_streaks(painter, &streaks);

    painter.text(
        Pos2::new(rect.center().x, rect.center().y - 150.0),
        Align2::CENTER_TOP,
        HEADING,
        FontId::proportional(FONT_STAGE_TITLE),
        colors::BLOOD_RED,
    );

    let input = input_rect(rect);
    painter.rect_stroke(input, 0.0, Stroke::new(3.0, colors::INPUT_BORDER));
    for i in 0..3 {
        let x = input.left() + 50.0 + i as f32 * 100.0;
        painter.line_segment(
            [Pos2::new(x, input.bottom()), Pos2::new(x + 20.0, input.bottom() + 20.0)],
            Stroke::new(2.0, colors::DRIP),
        );
    }

    let font = FontId::proportional(FONT_BLOOD);
    let name = entry.draft().as_str();
    let origin = Pos2::new(input.left() + 20.0, input.center().y - 20.0);
    if !name.is_empty() {
        draw_revealed_text(painter, origin, name, entry.reveal(), font.clone(), colors::REVEALED_NAME);
    }

    if entry.caret_visible() {
        let shown = entry.reveal().progress(entry.draft().len()) as usize;
        let prefix: String = name.chars().take(shown).collect();
        let x = origin.x + prefix_width(painter, &prefix, &font);
        painter.line_segment(
            [Pos2::new(x, input.center().y - 20.0), Pos2::new(x, input.center().y + 20.0)],
            Stroke::new(3.0, colors::CARET),
        );
    }

    painter.text(
        Pos2::new(rect.center().x, rect.center().y + 150.0),
        Align2::CENTER_TOP,
        prompt(!name.is_empty()),
        font,
        colors::DIM_PROMPT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_depends_on_draft() {
        assert_eq!(prompt(false), "Press ENTER to be named Rouge");
        assert_eq!(prompt(true), "Press ENTER to confirm");
    }

    #[test]
    fn test_input_box_sits_below_center() {
        let screen = Rect::from_min_size(Pos2::ZERO, Vec2::new(1280.0, 720.0));
        let input = input_rect(screen);
        assert_eq!(input.min, Pos2::new(390.0, 360.0));
        assert_eq!(input.size(), Vec2::new(500.0, 60.0));
    }
}
