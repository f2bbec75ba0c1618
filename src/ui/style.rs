//! Garnet-themed egui styling.
//!
//! Near-black crimson backgrounds, hard borders, blood-red text and the
//! blackletter font when it can be found.

use crate::assets::{read_asset, AssetError, BLOOD_FONT_FILE};
use crate::config::GameConfig;
use egui::epaint::Shadow;
use egui::style::{WidgetVisuals, Widgets};
use egui::{Color32, FontData, FontDefinitions, FontFamily, Frame, Margin, Rounding, Stroke, Style, Visuals};
use std::path::Path;

/// Garnet color palette
pub mod colors {
    use egui::Color32;

    // Screen backgrounds
    pub const SCREEN_BG: Color32 = Color32::from_rgb(15, 0, 10);
    pub const NAME_ENTRY_BG: Color32 = Color32::from_rgb(20, 0, 10);
    pub const GAME_BG: Color32 = Color32::from_rgb(0, 10, 20);

    // Headings
    pub const BLOOD_RED: Color32 = Color32::from_rgb(180, 0, 30);
    pub const GARNET: Color32 = Color32::from_rgb(180, 4, 45);
    pub const TITLE_SHADOW: Color32 = Color32::from_rgb(80, 0, 0);
    pub const SUBTITLE: Color32 = Color32::from_rgb(150, 30, 30);

    // Name entry
    pub const INPUT_BORDER: Color32 = Color32::from_rgb(80, 0, 0);
    pub const DRIP: Color32 = Color32::from_rgb(120, 0, 0);
    pub const CARET: Color32 = Color32::from_rgb(200, 0, 0);
    pub const REVEALED_NAME: Color32 = Color32::from_rgb(200, 30, 50);
    pub const DIM_PROMPT: Color32 = Color32::from_rgb(100, 0, 20);
    pub const OATH_PROMPT: Color32 = Color32::from_rgb(120, 0, 20);

    // Class buttons and tooltips
    pub const BUTTON_BORDER: Color32 = Color32::from_rgb(40, 0, 0);
    pub const BUTTON_TEXT: Color32 = Color32::from_rgb(220, 220, 220);
    pub const TOOLTIP_BG: Color32 = Color32::from_rgb(20, 0, 10);
    pub const TOOLTIP_BORDER: Color32 = Color32::from_rgb(120, 0, 0);
    pub const PALE_TEXT: Color32 = Color32::from_rgb(200, 200, 200);

    // Summary
    pub const SUMMARY_TEXT: Color32 = Color32::from_rgb(200, 100, 100);
    pub const SUMMARY_PROMPT: Color32 = Color32::from_rgb(180, 30, 30);

    // Inventory panel
    pub const PANEL_BG: Color32 = Color32::from_rgb(32, 0, 0);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(90, 0, 10);
    pub const PANEL_TEXT: Color32 = Color32::from_rgb(192, 0, 0);
    pub const PANEL_BUTTON: Color32 = Color32::from_rgb(64, 0, 0);
    pub const PANEL_BUTTON_HOVER: Color32 = Color32::from_rgb(90, 0, 10);
    pub const PANEL_BUTTON_TEXT: Color32 = Color32::from_rgb(255, 204, 204);
}

/// Border width for panels and buttons
pub const BORDER_WIDTH: f32 = 1.0;

/// egui family name of the blackletter font
pub const BLOOD_FONT_NAME: &str = "old_london";

pub fn garnet_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_rounding = Rounding::ZERO;
    visuals.menu_rounding = Rounding::ZERO;
    visuals.window_shadow = Shadow::NONE;
    visuals.popup_shadow = Shadow::NONE;

    visuals.window_fill = colors::PANEL_BG;
    visuals.window_stroke = Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER);
    visuals.panel_fill = colors::SCREEN_BG;
    visuals.extreme_bg_color = colors::PANEL_BG;
    visuals.faint_bg_color = Color32::from_rgb(40, 0, 4);

    visuals.widgets = garnet_widgets();

    visuals.selection.bg_fill = colors::PANEL_BUTTON_HOVER;
    visuals.selection.stroke = Stroke::new(1.0, colors::PANEL_BUTTON_TEXT);
    visuals.override_text_color = Some(colors::PANEL_TEXT);

    visuals
}

fn garnet_widgets() -> Widgets {
    let widget = |bg: Color32, border: Stroke| WidgetVisuals {
        bg_fill: bg,
        weak_bg_fill: bg,
        bg_stroke: border,
        rounding: Rounding::ZERO,
        fg_stroke: Stroke::new(1.0, colors::PANEL_BUTTON_TEXT),
        expansion: 0.0,
    };
    let border = Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER);

    Widgets {
        noninteractive: WidgetVisuals {
            fg_stroke: Stroke::new(1.0, colors::PANEL_TEXT),
            ..widget(colors::PANEL_BG, border)
        },
        inactive: widget(colors::PANEL_BUTTON, border),
        hovered: widget(colors::PANEL_BUTTON_HOVER, Stroke::new(BORDER_WIDTH, colors::PANEL_BUTTON_TEXT)),
        active: widget(colors::PANEL_BUTTON_HOVER, Stroke::new(2.0, colors::PANEL_BUTTON_TEXT)),
        open: widget(colors::PANEL_BUTTON_HOVER, border),
    }
}

/// Read a font file into egui font data
pub fn load_font(path: &Path) -> Result<FontData, AssetError> {
    read_asset(path).map(FontData::from_owned)
}

/// Font definitions with the blackletter font first in the proportional
/// family. Falls back to egui's defaults if the font is missing.
pub fn load_fonts(config: &GameConfig) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();

    match load_font(&config.font_path(BLOOD_FONT_FILE)) {
        Ok(font_data) => {
            fonts.font_data.insert(BLOOD_FONT_NAME.to_owned(), font_data);
            fonts
                .families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, BLOOD_FONT_NAME.to_owned());
        }
        Err(e) => log::warn!("{}; using the default font", e),
    }

    fonts
}

pub fn garnet_window_frame() -> Frame {
    Frame::none()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER))
        .inner_margin(Margin::same(10.0))
}

pub fn garnet_style() -> Style {
    let mut style = Style::default();
    style.visuals = garnet_visuals();
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_keeps_defaults() {
        let config = GameConfig {
            asset_dir: "definitely/not/here".into(),
            ..GameConfig::default()
        };
        let fonts = load_fonts(&config);
        assert!(!fonts.font_data.contains_key(BLOOD_FONT_NAME));
        assert_eq!(fonts.families, FontDefinitions::default().families);
    }
}
