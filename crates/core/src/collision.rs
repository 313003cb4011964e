//! Collision and score monitor
//!
//! The original expressed these as reactive watchers on shared values; here
//! they are explicit previous-value tracking evaluated once per tick, after
//! physics and obstacle motion have written their results.
//!
//! Three watchers, each keyed on one value:
//!
//! - bird y → boundary and pipe-overlap test (inclusive rect edges)
//! - pipe x → falling-edge score crossing of the bird's x-coordinate
//! - game-over flag → rising-edge freeze of the obstacle track

use tui_flappy_types::{Rect, BIRD_H, BIRD_W, BIRD_X, GROUND_Y};

/// Bird center point for a given top-edge y.
pub fn bird_center(bird_y: f32) -> (f32, f32) {
    (BIRD_X + BIRD_W / 2.0, bird_y + BIRD_H / 2.0)
}

/// Boundary test on the bird's y position.
///
/// Exactly at the ceiling (0) or the ground line counts as out; one unit
/// inside either does not.
pub fn hits_bounds(bird_y: f32) -> bool {
    bird_y <= 0.0 || bird_y >= GROUND_Y
}

/// True when the point lies inside either pipe rectangle.
///
/// Bounds are inclusive: exact edge contact is a hit.
pub fn hits_pipes(cx: f32, cy: f32, top: &Rect, bottom: &Rect) -> bool {
    top.contains(cx, cy) || bottom.contains(cx, cy)
}

/// Falling-edge crossing of a fixed vertical line at `line_x`.
///
/// Fires only when the value actually changed and moved from strictly right
/// of the line to at-or-left of it: exactly once per crossing, never on a
/// repeated read of an unchanged value.
pub fn crossed_score_line(prev: f32, current: f32, line_x: f32) -> bool {
    current != prev && prev > line_x && current <= line_x
}

/// What one monitor evaluation observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorVerdict {
    /// The bird hit a boundary or a pipe.
    pub collided: bool,
    /// The pipe pair crossed the bird's x this step.
    pub scored: bool,
}

/// Previous-value state for the watchers.
#[derive(Debug, Clone)]
pub struct Monitor {
    prev_bird_y: f32,
    prev_pipe_x: f32,
    prev_game_over: bool,
}

impl Monitor {
    pub fn new(bird_y: f32, pipe_x: f32) -> Self {
        Self {
            prev_bird_y: bird_y,
            prev_pipe_x: pipe_x,
            prev_game_over: false,
        }
    }

    /// Re-arm all watchers after a restart.
    pub fn reset(&mut self, bird_y: f32, pipe_x: f32) {
        self.prev_bird_y = bird_y;
        self.prev_pipe_x = pipe_x;
        self.prev_game_over = false;
    }

    /// Evaluate the bird-y and pipe-x watchers against current state.
    ///
    /// Each watcher only runs when its key changed since the previous
    /// evaluation, mirroring the original's change-driven reactions.
    pub fn observe(&mut self, bird_y: f32, pipe_x: f32, top: &Rect, bottom: &Rect) -> MonitorVerdict {
        let mut verdict = MonitorVerdict::default();

        if bird_y != self.prev_bird_y {
            let (cx, cy) = bird_center(bird_y);
            verdict.collided = hits_bounds(bird_y) || hits_pipes(cx, cy, top, bottom);
            self.prev_bird_y = bird_y;
        }

        if pipe_x != self.prev_pipe_x {
            verdict.scored = crossed_score_line(self.prev_pipe_x, pipe_x, BIRD_X);
            self.prev_pipe_x = pipe_x;
        }

        verdict
    }

    /// Game-over watcher: true exactly once, on the false→true edge.
    pub fn game_over_rising(&mut self, game_over: bool) -> bool {
        let rose = game_over && !self.prev_game_over;
        self.prev_game_over = game_over;
        rose
    }
}
