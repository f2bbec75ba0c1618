//! Title screen and the fade out of it.

use super::effects::{draw_garnet, shadowed_text};
use super::style::colors;
use super::text::draw_wrapped_centered;
use crate::constants::*;
use crate::screen::{fade_alpha, title_prompt_visible, title_tint};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, TextureHandle, Vec2};

pub const TITLE: &str = "GARNET";
pub const SUBTITLE: &str = "Shadowborn";
pub const PROMPT: &str = "Press SPACE to begin your dark journey";

pub fn draw_title_screen(painter: &Painter, rect: Rect, time: f32, sprite: Option<&TextureHandle>) {
    let [r, g, b] = title_tint(time);
    painter.rect_filled(rect, 0.0, Color32::from_rgb(r, g, b));

    let center = rect.center() - Vec2::new(0.0, 50.0);
    match sprite {
        Some(texture) => {
            let sprite_rect = Rect::from_center_size(center, Vec2::splat(TITLE_SPRITE_SIZE));
            let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
            painter.image(texture.id(), sprite_rect, uv, Color32::WHITE);
        }
        None => {
            let half = TITLE_SPRITE_SIZE / 2.0;
            draw_garnet(painter, center, half, half, colors::BLOOD_RED);
        }
    }

    shadowed_text(
        painter,
        Pos2::new(rect.center().x, rect.top() + 150.0),
        Align2::CENTER_TOP,
        TITLE,
        FontId::proportional(FONT_TITLE),
        colors::GARNET,
        5.0,
    );
    painter.text(
        Pos2::new(rect.center().x, rect.top() + 250.0),
        Align2::CENTER_TOP,
        SUBTITLE,
        FontId::proportional(FONT_SUBTITLE),
        colors::SUBTITLE,
    );

    if title_prompt_visible(time) {
        draw_wrapped_centered(
            painter,
            PROMPT,
            rect.center().x,
            rect.top() + 550.0,
            rect.width() - TEXT_WRAP_MARGIN,
            50.0,
            FontId::proportional(FONT_CRIMSON),
            colors::PALE_TEXT,
        );
    }
}

/// The title darkening to black
pub fn draw_fade_out(painter: &Painter, rect: Rect, time: f32, elapsed: f32, sprite: Option<&TextureHandle>) {
    draw_title_screen(painter, rect, time, sprite);
    painter.rect_filled(rect, 0.0, Color32::BLACK.gamma_multiply(fade_alpha(elapsed)));
}
