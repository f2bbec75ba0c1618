//! Blood combat formulas.
//!
//! Standalone rules for a combat loop that does not exist yet. Nothing in the
//! creation flow calls these.

use crate::character::{AbilityScores, Character};
use crate::constants::*;
use rand::Rng;
use thiserror::Error;

/// Anything that can bleed
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    pub hp: i32,
    pub max_hp: i32,
    pub stats: AbilityScores,
    pub relics: Vec<String>,
}

impl Combatant {
    /// A combatant built from a finished character
    pub fn from_character(character: &Character, max_hp: i32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            stats: character.stats,
            relics: character.inventory.relics.clone(),
        }
    }

    /// Remaining health as a fraction of max (drives splatter intensity)
    pub fn health_ratio(&self) -> f32 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        self.hp as f32 / self.max_hp as f32
    }
}

/// A necromantic spell
pub struct Spell {
    pub name: &'static str,
    pub blood_cost: i32,
    pub effect: fn(&mut Combatant) -> String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NecromancyError {
    #[error("Not enough life force! ({hp} hp, ritual needs {cost})")]
    NotEnoughLifeForce { hp: i32, cost: i32 },
}

/// Damage of a shadow strike: 1d8 + DEX/2, more with a garnet shard
pub fn shadow_strike(attacker: &Combatant, rng: &mut impl Rng) -> i32 {
    let mut damage = rng.gen_range(1..=SHADOW_STRIKE_DIE) + attacker.stats.dexterity / 2;
    if attacker.relics.iter().any(|r| r == GARNET_SHARD_RELIC) {
        damage += GARNET_SHARD_BONUS;
    }
    damage
}

/// Pay a spell's blood cost and apply it to `target`
pub fn cast_necromancy(
    caster: &mut Combatant,
    target: &mut Combatant,
    spell: &Spell,
) -> Result<String, NecromancyError> {
    if caster.hp < spell.blood_cost {
        return Err(NecromancyError::NotEnoughLifeForce {
            hp: caster.hp,
            cost: spell.blood_cost,
        });
    }
    caster.hp -= spell.blood_cost;
    let effect = (spell.effect)(target);
    Ok(format!("Blood ritual complete! {}", effect))
}

/// HP cost of dark magic of a given power
pub fn blood_cost(spell_power: i32, sacrifice_ratio: f32, rng: &mut impl Rng) -> i32 {
    let base = (spell_power * 2) as f32;
    let cost = (base * (1.0 + rng.gen::<f32>() * sacrifice_ratio)) as i32;
    cost.max(1)
}

/// Randomly nudge a stat down (or slightly up), never below the floor
pub fn corrupt_stat(value: i32, rng: &mut impl Rng) -> i32 {
    (value + rng.gen_range(-2..=1)).max(CORRUPTED_STAT_FLOOR)
}
