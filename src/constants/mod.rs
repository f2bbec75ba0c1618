//! Fixed tuning numbers, split by domain.
//!
//! Anything a player might want to change lives in `GameConfig` instead.

mod animation;
mod combat;
mod creation;
mod time;
mod ui;

pub use animation::*;
pub use combat::*;
pub use creation::*;
pub use time::*;
pub use ui::*;
