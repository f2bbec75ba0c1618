//! Character creation constants.

/// Longest draft name accepted, in characters
pub const MAX_NAME_LEN: usize = 12;
/// Prefix of the name given to a shadowborn who refuses to pick one
pub const AUTO_NAME_PREFIX: &str = "Rouge";

/// Dice thrown per ability score
pub const DICE_PER_ABILITY: usize = 3;
/// Faces on each stat die
pub const DIE_SIDES: i32 = 6;
/// Value forced onto the lowest die of every ability roll
pub const DARK_BLESSING_VALUE: i32 = 6;

/// Crimson tears a fresh shadowborn carries
pub const STARTING_CRIMSON_TEARS: i32 = 3;
/// Garnet shards a fresh shadowborn carries
pub const STARTING_GARNET_SHARDS: i32 = 1;
/// Minimum starting gold (inclusive)
pub const STARTING_GOLD_MIN: u32 = 5;
/// Maximum starting gold (inclusive)
pub const STARTING_GOLD_MAX: u32 = 20;

/// Epithets appended to a chosen name once creation is over
pub const FLOW_EPITHETS: [&str; 6] = [
    "the Bloodsoaked",
    "of the Crimson Veil",
    "the Cursed",
    "the Shadow Walker",
    "the Dark Herald",
    "the Forsaken",
];
