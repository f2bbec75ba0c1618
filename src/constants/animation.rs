//! Animation-related constants.

/// Draft-name characters revealed per second of elapsed time
pub const REVEAL_CHARS_PER_SECOND: f32 = 10.0;
/// Full caret blink cycle in seconds (visible for the first half)
pub const CARET_BLINK_PERIOD: f32 = 1.0;
/// Fraction of the blink cycle during which the caret is drawn
pub const CARET_VISIBLE_FRACTION: f32 = 0.5;
/// Confirmation dialog pulse speed (radians per second)
pub const CONFIRM_PULSE_SPEED: f32 = 2.0;
/// Resting size of the pulsing garnet in the confirmation dialog
pub const CONFIRM_GEM_BASE_SIZE: f32 = 30.0;
/// How far the confirmation garnet grows and shrinks
pub const CONFIRM_GEM_PULSE_SIZE: f32 = 10.0;
/// Title-to-creation fade duration in seconds
pub const FADE_DURATION: f32 = 2.0;
/// Length of one title background pulse step in seconds
pub const TITLE_PULSE_STEP: f32 = 0.3;
/// Number of title background pulse steps before wrapping
pub const TITLE_PULSE_STEPS: u32 = 10;
/// Title prompt blink period in seconds (visible for the first half)
pub const TITLE_PROMPT_PERIOD: f32 = 2.0;
/// Random blood streaks drawn along the top of the name entry screen
pub const BLOOD_DRIP_INTENSITY: usize = 30;
