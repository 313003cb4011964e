//! Terminal input module
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The tap
//! is a discrete press; terminal auto-repeat is filtered out by the main
//! loop (`KeyEventKind::Repeat`), so no repeat handling lives here.

pub mod map;

pub use tui_flappy_types as types;

pub use map::{handle_key_event, should_quit};
