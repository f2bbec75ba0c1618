//! UI and window constants.

/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;

/// Class button size
pub const CLASS_BUTTON_WIDTH: f32 = 300.0;
pub const CLASS_BUTTON_HEIGHT: f32 = 80.0;
/// Horizontal distance from screen center to each class column
pub const CLASS_COLUMN_OFFSET: f32 = 200.0;
/// Vertical offset of the first class row from screen center
pub const CLASS_FIRST_ROW_OFFSET: f32 = -100.0;
/// Vertical distance between class rows
pub const CLASS_ROW_SPACING: f32 = 200.0;
/// Number of class buttons stacked in each column
pub const CLASS_GRID_ROWS: usize = 2;
/// Tooltip offset from the pointer
pub const TOOLTIP_OFFSET: f32 = 20.0;

/// Name input box size
pub const NAME_INPUT_WIDTH: f32 = 500.0;
pub const NAME_INPUT_HEIGHT: f32 = 60.0;
/// Confirmation dialog size
pub const CONFIRM_DIALOG_WIDTH: f32 = 600.0;
pub const CONFIRM_DIALOG_HEIGHT: f32 = 400.0;

/// Horizontal space kept free when wrapping screen text
pub const TEXT_WRAP_MARGIN: f32 = 200.0;
/// Title sprite edge length
pub const TITLE_SPRITE_SIZE: f32 = 300.0;

/// Font sizes
pub const FONT_TITLE: f32 = 96.0;
pub const FONT_SUBTITLE: f32 = 64.0;
pub const FONT_STAGE_TITLE: f32 = 72.0;
pub const FONT_CRIMSON: f32 = 42.0;
pub const FONT_BLOOD: f32 = 40.0;
pub const FONT_REGULAR: f32 = 36.0;
pub const FONT_TOOLTIP: f32 = 32.0;
