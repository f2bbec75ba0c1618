//! Character summary screen.

use super::effects::shadowed_text;
use super::style::colors;
use super::text::draw_wrapped_centered;
use crate::character::Character;
use crate::constants::*;
use egui::{Align2, FontId, Painter, Pos2, Rect};

pub const HEADING: &str = "SHADOWBORN CREATED";
pub const PROMPT: &str = "Are you happy with your Shadowborn? (Y) Yes  (N) No";

/// Lines of the summary body. Empty strings are spacers.
pub fn summary_lines(character: &Character) -> Vec<String> {
    let stats = &character.stats;
    let inventory = &character.inventory;
    let first = |items: &[String]| items.first().cloned().unwrap_or_else(|| "None".to_string());
    vec![
        character.name.clone(),
        character.class.name().to_string(),
        String::new(),
        format!("STR: {}  DEX: {}", stats.strength, stats.dexterity),
        format!("CON: {}  INT: {}", stats.constitution, stats.intelligence),
        format!("WIS: {}  CHA: {}", stats.wisdom, stats.charisma),
        String::new(),
        "Inventory:".to_string(),
        format!("Weapon: {}", first(&inventory.weapons)),
        format!("Armor: {}", first(&inventory.armor)),
        format!("Gold: {}", inventory.gold),
    ]
}

pub fn draw_summary(painter: &Painter, rect: Rect, character: &Character) {
    painter.rect_filled(rect, 0.0, colors::SCREEN_BG);
    shadowed_text(
        painter,
        Pos2::new(rect.center().x, rect.top() + 50.0),
        Align2::CENTER_TOP,
        HEADING,
        FontId::proportional(FONT_TITLE),
        colors::BLOOD_RED,
        3.0,
    );

    let max_width = rect.width() - TEXT_WRAP_MARGIN;
    let mut y = rect.top() + 150.0;
    for line in summary_lines(character) {
        if line.is_empty() {
            y += 30.0;
            continue;
        }
        y = draw_wrapped_centered(
            painter,
            &line,
            rect.center().x,
            y,
            max_width,
            40.0,
            FontId::proportional(FONT_REGULAR),
            colors::SUMMARY_TEXT,
        );
    }

    draw_wrapped_centered(
        painter,
        PROMPT,
        rect.center().x,
        rect.top() + 600.0,
        max_width,
        50.0,
        FontId::proportional(FONT_CRIMSON),
        colors::SUMMARY_PROMPT,
    );
}
