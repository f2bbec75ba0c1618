//! Crimson inventory panel.
//!
//! A read-only window over the finished character with two tabs: what the
//! shadowborn carries, and the garnet sigils (class modifiers plus the relic
//! and potion catalogs).

use super::style;
use crate::character::{Ability, Character};
use crate::items::{BLOOD_POTIONS, GARNET_RELICS};
use egui::{Color32, RichText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InventoryTab {
    #[default]
    Inventory,
    GarnetSigils,
}

impl InventoryTab {
    pub const ALL: [InventoryTab; 2] = [InventoryTab::Inventory, InventoryTab::GarnetSigils];

    pub fn label(self) -> &'static str {
        match self {
            InventoryTab::Inventory => "Inventory",
            InventoryTab::GarnetSigils => "Garnet Sigils",
        }
    }
}

/// Items of one inventory slot, or a placeholder when it is empty
pub fn slot_text(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

/// A class modifier with its sign, e.g. "+2" or "0"
pub fn signed(value: i32) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

pub fn draw_inventory_window(ctx: &egui::Context, character: &Character, tab: &mut InventoryTab) {
    let screen = ctx.screen_rect();
    egui::Window::new("Crimson Inventory")
        .default_pos([screen.center().x - 250.0, screen.center().y - 200.0])
        .default_size([500.0, 400.0])
        .collapsible(false)
        .resizable(true)
        .frame(style::garnet_window_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for candidate in InventoryTab::ALL {
                    ui.selectable_value(tab, candidate, candidate.label());
                }
            });
            ui.separator();

            match tab {
                InventoryTab::Inventory => draw_inventory_tab(ui, character),
                InventoryTab::GarnetSigils => draw_sigils_tab(ui, character),
            }
        });
}

fn draw_inventory_tab(ui: &mut egui::Ui, character: &Character) {
    let inventory = &character.inventory;
    egui::Grid::new("inventory_grid")
        .num_columns(2)
        .spacing([20.0, 6.0])
        .show(ui, |ui| {
            let rows = [
                ("Weapons", slot_text(&inventory.weapons)),
                ("Armor", slot_text(&inventory.armor)),
                ("Relics", slot_text(&inventory.relics)),
                ("Gold", inventory.gold.to_string()),
                ("Crimson Tears", character.crimson_tears.to_string()),
                ("Garnet Shards", character.garnet_shards.to_string()),
            ];
            for (label, value) in rows {
                ui.label(label);
                ui.label(RichText::new(value).color(style::colors::PANEL_BUTTON_TEXT));
                ui.end_row();
            }
        });
}

fn draw_sigils_tab(ui: &mut egui::Ui, character: &Character) {
    let def = character.class.def();
    ui.heading(def.name);
    ui.label(RichText::new(def.description.replace('\n', " / ")).italics());
    ui.add_space(6.0);

    ui.horizontal_wrapped(|ui| {
        for ability in Ability::ALL {
            ui.label(format!("{} {}", ability.label(), signed(def.modifiers.get(ability))));
        }
    });

    ui.add_space(10.0);
    ui.heading("Garnet Relics");
    ui.separator();
    for relic in GARNET_RELICS {
        ui.label(RichText::new(relic.name).strong());
        ui.label(relic.kind.summary());
        ui.label(RichText::new(relic.effect).italics());
        ui.add_space(4.0);
    }

    ui.add_space(10.0);
    ui.heading("Blood Potions");
    ui.separator();
    for potion in BLOOD_POTIONS {
        let [r, g, b] = potion.color;
        ui.label(RichText::new(potion.name).strong().color(Color32::from_rgb(r, g, b)));
        ui.label(potion.effect);
    }
}
