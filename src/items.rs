//! Item definitions - starting gear, garnet relics and blood potions.
//!
//! Data only. Nothing here is equipped or consumed yet; the inventory panel
//! reads these tables to describe what a shadowborn could find.

/// Weapon every shadowborn starts with
pub const STARTING_WEAPON: &str = "Rusty Dagger";
/// Armor every shadowborn starts with
pub const STARTING_ARMOR: &str = "Tattered Robes";

/// Equipment slot a relic occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelicKind {
    Weapon {
        /// Dice expression, e.g. "2d6+3"
        damage: &'static str,
        /// Life spent per use
        blood_cost: i32,
    },
    Armor {
        defense: i32,
        curse: &'static str,
    },
}

/// A garnet relic
pub struct RelicDef {
    pub name: &'static str,
    pub kind: RelicKind,
    pub effect: &'static str,
}

/// A blood potion
pub struct PotionDef {
    pub name: &'static str,
    pub effect: &'static str,
    pub color: [u8; 3],
}

/// Static table of all garnet relics
pub static GARNET_RELICS: &[RelicDef] = &[
    RelicDef {
        name: "Shard of the Crimson Moon",
        kind: RelicKind::Weapon {
            damage: "2d6+3",
            blood_cost: 1,
        },
        effect: "Drains HP on hit",
    },
    RelicDef {
        name: "Vein of the Dark Apostle",
        kind: RelicKind::Armor {
            defense: 15,
            curse: "Random stat drain",
        },
        effect: "Converts 10% damage to HP",
    },
];

/// Static table of all blood potions
pub static BLOOD_POTIONS: &[PotionDef] = &[PotionDef {
    name: "Vial of Forbidden Life",
    effect: "Restores 50 HP but reduces max HP by 10",
    color: [200, 0, 0],
}];

/// Find a relic by name
pub fn relic(name: &str) -> Option<&'static RelicDef> {
    GARNET_RELICS.iter().find(|def| def.name == name)
}

impl RelicKind {
    /// One-line summary for the inventory panel
    pub fn summary(&self) -> String {
        match self {
            RelicKind::Weapon { damage, blood_cost } => {
                format!("Weapon  {}  (blood cost {})", damage, blood_cost)
            }
            RelicKind::Armor { defense, curse } => {
                format!("Armor  defense {}  curse: {}", defense, curse)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relic_lookup() {
        let moon = relic("Shard of the Crimson Moon").unwrap();
        assert!(matches!(moon.kind, RelicKind::Weapon { blood_cost: 1, .. }));
        assert!(relic("Garnet Shard").is_none());
    }

    #[test]
    fn test_armor_relic_is_cursed() {
        let vein = relic("Vein of the Dark Apostle").unwrap();
        assert_eq!(
            vein.kind.summary(),
            "Armor  defense 15  curse: Random stat drain"
        );
    }

    #[test]
    fn test_potion_table() {
        assert_eq!(BLOOD_POTIONS.len(), 1);
        assert_eq!(BLOOD_POTIONS[0].color, [200, 0, 0]);
    }
}
