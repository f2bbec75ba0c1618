//! Stat rolling.
//!
//! Each ability is 3d6 where the lowest die is replaced by a six (the dark
//! blessing), plus the class modifier. Abilities are rolled independently.

use crate::character::{Ability, AbilityScores};
use crate::classes::DarkClass;
use crate::constants::*;
use rand::Rng;

/// Roll one ability score before any class modifier is applied
pub fn roll_blessed_dice(rng: &mut impl Rng) -> i32 {
    let mut dice = [0; DICE_PER_ABILITY];
    for die in dice.iter_mut() {
        *die = rng.gen_range(1..=DIE_SIDES);
    }
    dice.sort_unstable();
    // The lowest die is blessed; it can only go up.
    dice[0] = DARK_BLESSING_VALUE;
    dice.iter().sum()
}

/// Roll all six ability scores for a class
pub fn roll_stats(class: DarkClass, rng: &mut impl Rng) -> AbilityScores {
    let modifiers = class.def().modifiers;
    let mut stats = AbilityScores::default();
    for ability in Ability::ALL {
        stats.set(ability, roll_blessed_dice(rng) + modifiers.get(ability));
    }
    stats
}

/// Lowest possible score for an ability of a class
pub fn minimum_score(class: DarkClass, ability: Ability) -> i32 {
    DARK_BLESSING_VALUE + (DICE_PER_ABILITY as i32 - 1) + class.def().modifiers.get(ability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_blessed_dice_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let total = roll_blessed_dice(&mut rng);
            assert!((8..=18).contains(&total), "rolled {}", total);
        }
    }

    #[test]
    fn test_blessed_dice_reach_both_extremes() {
        let mut rng = StdRng::seed_from_u64(11);
        let rolls: Vec<i32> = (0..5000).map(|_| roll_blessed_dice(&mut rng)).collect();
        assert!(rolls.contains(&8));
        assert!(rolls.contains(&18));
    }

    #[test]
    fn test_roll_stats_respects_class_floor() {
        let mut rng = StdRng::seed_from_u64(42);
        for class in DarkClass::ALL {
            for _ in 0..500 {
                let stats = roll_stats(class, &mut rng);
                for (ability, score) in stats.iter() {
                    assert!(score >= minimum_score(class, ability));
                    assert!(score >= 8 + class.def().modifiers.get(ability));
                    assert!(score <= 18 + class.def().modifiers.get(ability));
                }
            }
        }
    }

    #[test]
    fn test_roll_stats_is_deterministic_for_a_seed() {
        let a = roll_stats(DarkClass::Harbinger, &mut StdRng::seed_from_u64(3));
        let b = roll_stats(DarkClass::Harbinger, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_minimum_score() {
        assert_eq!(minimum_score(DarkClass::Nightblade, Ability::Dexterity), 12);
        assert_eq!(minimum_score(DarkClass::GarnetApostle, Ability::Charisma), 8);
    }
}
