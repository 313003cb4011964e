//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, terminal I/O, or clocks,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical obstacle sequences
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run headless (simulation, benchmarks) or under any
//!   front end
//! - **Fast**: Zero-allocation tick path (the event buffer is a stack array)
//!
//! # Module Structure
//!
//! - [`physics`]: gravity integration and velocity-derived bird tilt
//! - [`obstacle`]: the pipe pair's shared horizontal motion and gap cycling
//! - [`collision`]: boundary/pipe tests and the previous-value watchers
//! - [`scoring`]: score-derived obstacle speed factor
//! - [`rng`]: deterministic gap-offset generation
//! - [`game_state`]: the one record owning all gameplay state
//! - [`snapshot`]: plain render data handed to the view layer
//!
//! # Game Rules
//!
//! - Constant gravity (500 units/s²); a flap hard-resets the vertical
//!   velocity to -300 units/s
//! - One obstacle pair cycles right edge → reset threshold, re-randomizing
//!   its gap each cycle and speeding up with score
//! - The bird's center point against two inclusive-bound rectangles decides
//!   pipe collisions; the ceiling and ground line are inclusive too
//! - Phases: `NotStarted → Playing → GameOver`, restart back to `Playing`
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::GameState;
//! use tui_flappy_types::GameAction;
//!
//! // Create a game on the title screen and tap to start.
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::Flap);
//!
//! // Advance one 16 ms frame.
//! let events = game.tick(16);
//! assert!(events.is_empty());
//! assert!(game.phase().is_playing());
//! ```
//!
//! # Timing
//!
//! The owner calls [`GameState::tick`](game_state::GameState::tick) every
//! frame with the measured elapsed milliseconds; physics and obstacle motion
//! share that one time base.

pub mod collision;
pub mod game_state;
pub mod obstacle;
pub mod physics;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use collision::{bird_center, crossed_score_line, hits_bounds, hits_pipes, Monitor, MonitorVerdict};
pub use game_state::{GameState, TickEvents};
pub use obstacle::ObstacleTrack;
pub use physics::{bird_rotation, integrate};
pub use rng::SimpleRng;
pub use scoring::speed_factor;
pub use snapshot::GameSnapshot;
