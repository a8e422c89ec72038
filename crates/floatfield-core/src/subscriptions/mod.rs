//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`]) -- key presses, resizes,
//!   focus changes and pastes from the terminal.
//! - **Frame clock** ([`FrameClock`]) -- a fixed-rate tick used to sample
//!   running animations.

mod frames;
mod terminal;

pub use frames::*;
pub use terminal::*;
