//! Frame pacing constants.

/// Frame-rate ceiling when no configuration overrides it
pub const TARGET_FPS: u32 = 60;
/// Largest frame delta fed to the game (prevents animations jumping after a stall)
pub const MAX_FRAME_DT: f32 = 0.1;
