//! Input handling for the glitch runner.

pub mod map;

pub use tui_glitch_types as types;

pub use map::{handle_key_event, should_quit};
