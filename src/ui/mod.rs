//! UI rendering using egui.
//!
//! Every screen is painted from the current `ScreenFlow` state. Nothing here
//! mutates game state; the only UI-owned state is which inventory tab is open.

pub mod class_select;
pub mod confirm_dialog;
pub mod effects;
pub mod inventory;
pub mod name_entry;
pub mod style;
pub mod summary;
pub mod text;
pub mod title_screen;

use crate::screen::{Screen, ScreenFlow};
use inventory::InventoryTab;

/// Textures and other loaded resources the screens draw with
#[derive(Default)]
pub struct UiAssets {
    /// None when the sprite failed to load; a drawn garnet is used instead
    pub title_sprite: Option<egui::TextureHandle>,
}

/// UI state that lives between frames
#[derive(Default)]
pub struct UiState {
    pub inventory_tab: InventoryTab,
}

/// Paint the current screen
pub fn draw_screen(ctx: &egui::Context, flow: &ScreenFlow, assets: &UiAssets, ui_state: &mut UiState) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(style::colors::SCREEN_BG))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter();
            let sprite = assets.title_sprite.as_ref();

            match flow.screen() {
                Screen::Title => title_screen::draw_title_screen(painter, rect, flow.time(), sprite),
                Screen::FadeOut { elapsed } => {
                    title_screen::draw_fade_out(painter, rect, flow.time(), *elapsed, sprite)
                }
                Screen::Creation(creation) => {
                    if let Some(entry) = creation.name_entry() {
                        name_entry::draw_name_entry(painter, rect, entry);
                    } else if let Some(select) = creation.class_select() {
                        class_select::draw_class_select(ctx, painter, rect, select);
                    }
                }
                Screen::Summary(character) => summary::draw_summary(painter, rect, character),
                Screen::Game { .. } => {
                    painter.rect_filled(rect, 0.0, style::colors::GAME_BG);
                }
            }
        });

    if let Screen::Game {
        character,
        show_inventory: true,
    } = flow.screen()
    {
        inventory::draw_inventory_window(ctx, character, &mut ui_state.inventory_tab);
    }
}
