//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # World Coordinates
//!
//! The game plays in a fixed logical space, scaled to the terminal only by the
//! view layer:
//!
//! - **Width**: 480 units
//! - **Height**: 800 units (y grows downward)
//! - **Bird x**: fixed at 120 (a quarter of the world width)
//! - **Ground line**: 700 (bottom margin of 100 units)
//!
//! # Physics Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 500.0 | Downward acceleration (units/s²) |
//! | `FLAP_IMPULSE` | -300.0 | Upward velocity set by a flap (units/s) |
//! | `BIRD_START_Y` | 800/3 | Bird spawn height |
//!
//! # Obstacle Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIPE_W` / `PIPE_H` | 104 / 640 | Pipe sprite dimensions |
//! | `BASE_CYCLE_MS` | 3000 | One right-to-left traversal at factor 1.0 |
//! | `PIPE_END_X` | -150.0 | Nominal traversal endpoint (defines base speed) |
//! | `PIPE_RESET_X` | -100.0 | Crossing this restarts the cycle |
//! | `GAP_OFFSET_MAX` | 150.0 | Gap offset is drawn from [-150, +150] |
//!
//! # Timing
//!
//! The main loop runs a fixed timestep of `TICK_MS` (16 ms ≈ 60 FPS) but feeds
//! the measured elapsed time into each tick, clamped to `MAX_FRAME_MS` so a
//! stalled terminal cannot produce a catch-up physics jump.
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{GameAction, Phase, Rect};
//!
//! let action = GameAction::from_str("flap").unwrap();
//! assert_eq!(action, GameAction::Flap);
//!
//! let phase = Phase::NotStarted;
//! assert!(!phase.is_playing());
//!
//! // Rect bounds are inclusive on all four edges.
//! let r = Rect::new(0.0, 0.0, 10.0, 10.0);
//! assert!(r.contains(10.0, 10.0));
//! ```

/// Logical world width in units.
pub const WORLD_W: f32 = 480.0;

/// Logical world height in units (y grows downward).
pub const WORLD_H: f32 = 800.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Upper bound on the elapsed time fed into one tick.
///
/// Keeps physics stable across terminal stalls (suspend, resize storm).
pub const MAX_FRAME_MS: u32 = 100;

/// Downward acceleration in units/s².
pub const GRAVITY: f32 = 500.0;

/// Velocity set (not added) by a flap, in units/s. Negative is up.
pub const FLAP_IMPULSE: f32 = -300.0;

/// Fixed horizontal position of the bird sprite's left edge.
pub const BIRD_X: f32 = WORLD_W / 4.0;

/// Bird sprite width in units.
pub const BIRD_W: f32 = 48.0;

/// Bird sprite height in units.
pub const BIRD_H: f32 = 24.0;

/// Bird spawn height (top edge), also restored on restart.
pub const BIRD_START_Y: f32 = WORLD_H / 3.0;

/// Screen-bottom margin; the ground line sits at `WORLD_H - GROUND_MARGIN`.
pub const GROUND_MARGIN: f32 = 100.0;

/// Ground line: bird y at or past this is game over.
pub const GROUND_Y: f32 = WORLD_H - GROUND_MARGIN;

/// Pipe sprite width in units.
pub const PIPE_W: f32 = 104.0;

/// Pipe sprite height in units.
pub const PIPE_H: f32 = 640.0;

/// How far each pipe sprite reaches from its world edge toward the gap.
///
/// The top pipe spans `[gap_offset - PIPE_OVERLAP, gap_offset + PIPE_OVERLAP]`,
/// the bottom pipe starts at `WORLD_H - PIPE_OVERLAP + gap_offset`, leaving a
/// `WORLD_H - PIPE_H` = 160 unit gap between them.
pub const PIPE_OVERLAP: f32 = PIPE_H / 2.0;

/// Nominal traversal endpoint of the obstacle cycle.
///
/// The pipe never actually reaches it (the reset threshold fires first); it
/// exists to define the base speed: `WORLD_W → PIPE_END_X` in `BASE_CYCLE_MS`.
pub const PIPE_END_X: f32 = -150.0;

/// Crossing this from the right restarts the obstacle cycle.
pub const PIPE_RESET_X: f32 = -100.0;

/// Duration of one obstacle traversal at speed factor 1.0, in milliseconds.
pub const BASE_CYCLE_MS: u32 = 3000;

/// Gap offsets are drawn uniformly from `[-GAP_OFFSET_MAX, +GAP_OFFSET_MAX]`.
///
/// The bound keeps the gap inside the visible play area for every draw.
pub const GAP_OFFSET_MAX: f32 = 150.0;

/// Obstacle speed multiplier at score 0.
pub const SPEED_FACTOR_MIN: f32 = 1.0;

/// Obstacle speed multiplier at `SPEED_FACTOR_CAP_SCORE` and beyond.
pub const SPEED_FACTOR_MAX: f32 = 2.0;

/// Score at which the obstacle speed factor saturates.
pub const SPEED_FACTOR_CAP_SCORE: u32 = 20;

/// Velocity magnitude mapped to the maximum bird tilt.
pub const ROTATION_VY_SPAN: f32 = 500.0;

/// Maximum bird tilt in radians (positive is nose-down).
pub const ROTATION_MAX_RAD: f32 = 0.5;

/// Game phase governing which updates are active.
///
/// The lifecycle goes `NotStarted → Playing → GameOver`, with
/// `GameOver → Playing` on restart. Physics, obstacle motion and the
/// collision monitor only run while `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    NotStarted,
    Playing,
    GameOver,
}

impl Phase {
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, Phase::GameOver)
    }

    /// Parse phase from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "notstarted" => Some(Phase::NotStarted),
            "playing" => Some(Phase::Playing),
            "gameover" => Some(Phase::GameOver),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "notStarted",
            Phase::Playing => "playing",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Each action maps to a specific game mechanic; what a `Flap` does depends
/// on the current [`Phase`] (start, impulse, or restart).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// The tap: starts the game, applies the upward impulse, or restarts
    /// after game over, depending on phase.
    Flap,
    /// Toggle pause state (only meaningful while playing).
    Pause,
    /// Restart the game from any phase.
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_flappy_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("flap"), Some(GameAction::Flap));
    /// assert_eq!(GameAction::from_str("Pause"), Some(GameAction::Pause));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flap" => Some(GameAction::Flap),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Flap => "flap",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Events emitted by one game tick (consumed by observers and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The pipe pair crossed the bird's x-coordinate; score went up by one.
    Scored,
    /// The bird hit a boundary or a pipe this tick.
    GameOver,
    /// The pipe pair crossed the reset threshold; gap re-randomized, cycle
    /// restarted from the right edge.
    CycleCompleted,
}

/// Axis-aligned rectangle in world units.
///
/// Containment is inclusive on all four edges: a point exactly on an edge is
/// inside. A bird and pipe exactly touching counts as a hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Inclusive point containment test.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_flappy_types::Rect;
    ///
    /// let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    /// assert!(r.contains(10.0, 20.0));   // corner
    /// assert!(r.contains(110.0, 70.0));  // opposite corner
    /// assert!(!r.contains(110.1, 70.0));
    /// ```
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }
}
