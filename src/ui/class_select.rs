//! Class selection screen.

use super::effects::draw_garnet;
use super::style::colors;
use crate::constants::*;
use crate::creation::class_select::{HitRect, Tooltip};
use crate::creation::ClassSelect;
use egui::{Align2, Color32, FontId, Id, LayerId, Order, Painter, Pos2, Rect, Stroke, Vec2};

pub const HEADING: &str = "CHOOSE YOUR DAMNATION";
/// Inset of the garnet icon from a button's edges
const GARNET_INSET: f32 = 15.0;

fn to_rect(hit: &HitRect) -> Rect {
    Rect::from_min_max(Pos2::new(hit.min.x, hit.min.y), Pos2::new(hit.max.x, hit.max.y))
}

pub fn draw_class_select(ctx: &egui::Context, painter: &Painter, rect: Rect, select: &ClassSelect) {
    painter.rect_filled(rect, 0.0, colors::SCREEN_BG);
    painter.text(
        Pos2::new(rect.center().x, rect.center().y - 200.0),
        Align2::CENTER_TOP,
        HEADING,
        FontId::proportional(FONT_STAGE_TITLE),
        colors::BLOOD_RED,
    );

    for option in select.options() {
        let def = option.class.def();
        let button = to_rect(&option.rect);
        let [r, g, b] = def.color;
        painter.rect_filled(button, 0.0, Color32::from_rgb(r, g, b));
        painter.rect_stroke(button, 0.0, Stroke::new(3.0, colors::BUTTON_BORDER));
        draw_garnet(
            painter,
            button.center(),
            button.width() / 2.0 - GARNET_INSET,
            button.height() / 2.0 - GARNET_INSET,
            colors::BLOOD_RED,
        );
        painter.text(
            button.center(),
            Align2::CENTER_CENTER,
            def.name,
            FontId::proportional(FONT_BLOOD),
            colors::BUTTON_TEXT,
        );
    }

    if let Some(tooltip) = select.tooltip() {
        let layer = LayerId::new(Order::Tooltip, Id::new("class_tooltip"));
        draw_tooltip(&ctx.layer_painter(layer), &tooltip);
    }
}

/// Multi-line box anchored at its top-left corner
pub fn draw_tooltip(painter: &Painter, tooltip: &Tooltip) {
    let font = FontId::proportional(FONT_TOOLTIP);
    let galleys: Vec<_> = tooltip
        .text
        .lines()
        .map(|line| painter.layout_no_wrap(line.to_owned(), font.clone(), colors::PALE_TEXT))
        .collect();
    if galleys.is_empty() {
        return;
    }

    let width = galleys.iter().map(|g| g.size().x).fold(0.0, f32::max);
    let height = galleys.iter().map(|g| g.size().y).sum::<f32>() + 10.0 * (galleys.len() - 1) as f32;
    let anchor = Pos2::new(tooltip.anchor.x, tooltip.anchor.y);
    let rect = Rect::from_min_size(anchor, Vec2::new(width + 20.0, height + 10.0));

    painter.rect_filled(rect, 0.0, colors::TOOLTIP_BG);
    painter.rect_stroke(rect, 0.0, Stroke::new(2.0, colors::TOOLTIP_BORDER));

    let mut y = rect.top() + 5.0;
    for galley in galleys {
        let line_height = galley.size().y;
        painter.galley(Pos2::new(rect.left() + 10.0, y), galley, colors::PALE_TEXT);
        y += line_height + 5.0;
    }
}
