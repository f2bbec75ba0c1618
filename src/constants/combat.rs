//! Combat formula constants.

/// Sides of the shadow strike damage die
pub const SHADOW_STRIKE_DIE: i32 = 8;
/// Extra shadow strike damage when carrying a garnet shard
pub const GARNET_SHARD_BONUS: i32 = 3;
/// Relic name that grants the garnet shard bonus
pub const GARNET_SHARD_RELIC: &str = "Garnet Shard";
/// Default blood cost variance for dark magic
pub const DEFAULT_SACRIFICE_RATIO: f32 = 0.1;
/// Lowest value a corrupted stat can drop to
pub const CORRUPTED_STAT_FLOOR: i32 = 1;
