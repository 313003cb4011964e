//! TUI Flappy (workspace facade crate).
//!
//! This package keeps the `tui_flappy::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under `crates/`.

pub use tui_flappy_core as core;
pub use tui_flappy_input as input;
pub use tui_flappy_term as term;
pub use tui_flappy_types as types;
