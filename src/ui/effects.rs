//! Painted effects shared by several screens: blood streaks, garnet gems,
//! shadowed headings and the letter-by-letter name reveal.

use super::style::colors;
use crate::creation::name_entry::RevealAnimation;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};
use rand::Rng;

/// One streak of blood running down from the top edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloodStreak {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub width: f32,
}

/// Random streaks along the top of a screen `screen_width` wide
pub fn blood_streaks(screen_width: f32, intensity: usize, rng: &mut impl Rng) -> Vec<BloodStreak> {
    (0..intensity)
        .map(|_| BloodStreak {
            x: rng.gen_range(0.0..=screen_width.max(0.0)),
            y: rng.gen_range(0.0..=50.0),
            length: rng.gen_range(20.0..=100.0),
            width: rng.gen_range(1..=3) as f32,
        })
        .collect()
}

/// Streaks darken as they run down
pub fn draw_blood_streaks(painter: &Painter, streaks: &[BloodStreak]) {
    const SEGMENT: f32 = 5.0;
    for streak in streaks {
        let mut offset = 0.0;
        while offset < streak.length {
            let red = (150.0 - offset / 2.0).max(0.0) as u8;
            let end = (offset + SEGMENT).min(streak.length);
            painter.line_segment(
                [
                    Pos2::new(streak.x, streak.y + offset),
                    Pos2::new(streak.x, streak.y + end),
                ],
                Stroke::new(streak.width, Color32::from_rgb(red, 0, 0)),
            );
            offset = end;
        }
    }
}

/// The four corners of a diamond
pub fn diamond(center: Pos2, half_width: f32, half_height: f32) -> Vec<Pos2> {
    vec![
        Pos2::new(center.x, center.y - half_height),
        Pos2::new(center.x + half_width, center.y),
        Pos2::new(center.x, center.y + half_height),
        Pos2::new(center.x - half_width, center.y),
    ]
}

pub fn draw_garnet(painter: &Painter, center: Pos2, half_width: f32, half_height: f32, color: Color32) {
    painter.add(Shape::convex_polygon(
        diamond(center, half_width, half_height),
        color,
        Stroke::NONE,
    ));
}

/// Text with a solid drop shadow behind it
pub fn shadowed_text(
    painter: &Painter,
    pos: Pos2,
    anchor: Align2,
    text: &str,
    font: FontId,
    color: Color32,
    shadow_offset: f32,
) -> Rect {
    painter.text(
        pos + Vec2::splat(shadow_offset),
        anchor,
        text,
        font.clone(),
        colors::TITLE_SHADOW,
    );
    painter.text(pos, anchor, text, font, color)
}

/// Draw `text` from `origin` (top-left) revealing it letter by letter.
/// The letter under the cursor fades in and drips.
pub fn draw_revealed_text(
    painter: &Painter,
    origin: Pos2,
    text: &str,
    reveal: &RevealAnimation,
    font: FontId,
    color: Color32,
) {
    let len = text.chars().count();
    let cursor = reveal.progress(len).floor() as usize;
    let line_height = painter.fonts(|f| f.row_height(&font));

    for (index, (byte, c)) in text.char_indices().enumerate() {
        let Some(alpha) = reveal.char_alpha(index, len) else {
            break;
        };
        let x = origin.x + prefix_width(painter, &text[..byte], &font);
        painter.text(
            Pos2::new(x, origin.y),
            Align2::LEFT_TOP,
            c,
            font.clone(),
            color.gamma_multiply(alpha),
        );
        if index == cursor {
            painter.line_segment(
                [
                    Pos2::new(x + 5.0, origin.y + line_height),
                    Pos2::new(x + 15.0, origin.y + line_height + 10.0),
                ],
                Stroke::new(2.0, colors::DRIP.gamma_multiply(alpha)),
            );
        }
    }
}

/// Width of the first part of a string as rendered in `font`
pub fn prefix_width(painter: &Painter, prefix: &str, font: &FontId) -> f32 {
    if prefix.is_empty() {
        return 0.0;
    }
    painter
        .layout_no_wrap(prefix.to_owned(), font.clone(), Color32::WHITE)
        .size()
        .x
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_streaks_stay_along_top_edge() {
        let mut rng = StdRng::seed_from_u64(30);
        let streaks = blood_streaks(1280.0, 30, &mut rng);
        assert_eq!(streaks.len(), 30);
        for s in &streaks {
            assert!((0.0..=1280.0).contains(&s.x));
            assert!((0.0..=50.0).contains(&s.y));
            assert!((20.0..=100.0).contains(&s.length));
            assert!((1.0..=3.0).contains(&s.width));
        }
    }

    #[test]
    fn test_streaks_on_zero_width_screen() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(blood_streaks(0.0, 5, &mut rng).iter().all(|s| s.x == 0.0));
    }

    #[test]
    fn test_diamond_corners() {
        let points = diamond(Pos2::new(100.0, 50.0), 30.0, 20.0);
        assert_eq!(
            points,
            vec![
                Pos2::new(100.0, 30.0),
                Pos2::new(130.0, 50.0),
                Pos2::new(100.0, 70.0),
                Pos2::new(70.0, 50.0),
            ]
        );
    }
}
