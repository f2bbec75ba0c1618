//! Class definitions - every dark class in one static table.
//!
//! The catalog is fixed at compile time. Table order is the order classes
//! are presented in, so it must match `DarkClass::ALL`.

use crate::character::AbilityScores;
use serde::{Deserialize, Serialize};

/// The four classes a shadowborn can be damned into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DarkClass {
    Bloodmancer,
    Nightblade,
    Harbinger,
    #[serde(rename = "Garnet Apostle")]
    GarnetApostle,
}

impl DarkClass {
    pub const ALL: [DarkClass; 4] = [
        DarkClass::Bloodmancer,
        DarkClass::Nightblade,
        DarkClass::Harbinger,
        DarkClass::GarnetApostle,
    ];

    /// Catalog entry for this class
    pub fn def(self) -> &'static ClassDef {
        &CLASS_DEFS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Look a class up by its display name
    pub fn from_name(name: &str) -> Option<DarkClass> {
        CLASS_DEFS.iter().find(|def| def.name == name).map(|def| def.class)
    }
}

/// Complete definition of a class
pub struct ClassDef {
    pub class: DarkClass,
    pub name: &'static str,
    /// Added to the rolled score of each ability
    pub modifiers: AbilityScores,
    /// Tooltip text, one trait per line
    pub description: &'static str,
    /// Button fill color
    pub color: [u8; 3],
}

/// Static table of all class definitions
pub static CLASS_DEFS: [ClassDef; 4] = [
    ClassDef {
        class: DarkClass::Bloodmancer,
        name: "Bloodmancer",
        modifiers: AbilityScores::new(1, 2, 2, 4, 3, 1),
        description: "Master of hemomancy\nExcels at blood magic\nWeak in melee combat",
        color: [120, 0, 30],
    },
    ClassDef {
        class: DarkClass::Nightblade,
        name: "Nightblade",
        modifiers: AbilityScores::new(3, 4, 2, 1, 1, 2),
        description: "Shadowy assassin\nHigh critical chance\nLow magical defense",
        color: [30, 0, 60],
    },
    ClassDef {
        class: DarkClass::Harbinger,
        name: "Harbinger",
        modifiers: AbilityScores::new(2, 1, 4, 2, 3, 1),
        description: "Tanky frontline fighter\nHigh health pool\nSlow movement speed",
        color: [60, 30, 0],
    },
    ClassDef {
        class: DarkClass::GarnetApostle,
        name: "Garnet Apostle",
        modifiers: AbilityScores::new(1, 2, 3, 3, 4, 0),
        description: "Garnet magic specialist\nBalanced abilities\nNo charisma",
        color: [90, 0, 0],
    },
];
