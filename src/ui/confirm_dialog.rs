//! Blood oath confirmation dialog.

use super::effects::draw_garnet;
use super::style::colors;
use crate::constants::*;
use crate::creation::confirm::ConfirmDialog;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

pub const PROMPT: &str = "(Y) Blood Oath  (N) Deny Name";

pub fn question(candidate: &str) -> String {
    format!("Accept {}?", candidate)
}

/// Border color brightens and dims with the pulse
pub fn border_color(glow: f32) -> Color32 {
    Color32::from_rgb(150 + (50.0 * glow.clamp(0.0, 1.0)) as u8, 0, 30)
}

pub fn draw_confirm_dialog(painter: &Painter, screen: Rect, dialog: &ConfirmDialog) {
    painter.rect_filled(screen, 0.0, colors::SCREEN_BG);

    let rect = Rect::from_center_size(
        screen.center(),
        Vec2::new(CONFIRM_DIALOG_WIDTH, CONFIRM_DIALOG_HEIGHT),
    );
    painter.rect_stroke(
        rect.expand(10.0),
        0.0,
        Stroke::new(5.0, border_color(dialog.border_glow())),
    );
    painter.rect_filled(rect, 0.0, Color32::from_black_alpha(200));

    painter.text(
        Pos2::new(rect.center().x, rect.top() + 50.0),
        Align2::CENTER_TOP,
        question(dialog.candidate()),
        FontId::proportional(FONT_STAGE_TITLE),
        colors::BLOOD_RED,
    );
    painter.text(
        Pos2::new(rect.center().x, rect.bottom() - 80.0),
        Align2::CENTER_TOP,
        PROMPT,
        FontId::proportional(FONT_BLOOD),
        colors::OATH_PROMPT,
    );

    let size = dialog.gem_size();
    draw_garnet(painter, rect.center(), size, size, colors::BLOOD_RED);
}
