//! Character record assembly.

use crate::character::{AbilityScores, Character, Inventory};
use crate::classes::DarkClass;
use crate::constants::*;
use crate::items::{STARTING_ARMOR, STARTING_WEAPON};
use rand::Rng;

/// Gear every shadowborn starts with; only the gold is random
pub fn starting_inventory(rng: &mut impl Rng) -> Inventory {
    Inventory {
        weapons: vec![STARTING_WEAPON.to_string()],
        armor: vec![STARTING_ARMOR.to_string()],
        relics: Vec::new(),
        gold: rng.gen_range(STARTING_GOLD_MIN..=STARTING_GOLD_MAX),
    }
}

/// Merge the outputs of every creation stage into the finished character
pub fn assemble(
    name: String,
    class: DarkClass,
    stats: AbilityScores,
    rng: &mut impl Rng,
) -> Character {
    Character {
        name,
        class,
        stats,
        crimson_tears: STARTING_CRIMSON_TEARS,
        garnet_shards: STARTING_GARNET_SHARDS,
        inventory: starting_inventory(rng),
    }
}
