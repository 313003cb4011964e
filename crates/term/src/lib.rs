//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a simple framebuffer that is diffed and flushed to a crossterm
//! backend, rather than going through a widget/layout library.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw the world as half-block pixels for a usable aspect ratio
//! - Flush only what changed between frames

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
