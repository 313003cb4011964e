//! Render snapshot - plain data handed to the view layer
//!
//! The view never touches `GameState` directly; it paints whatever the
//! snapshot says. This keeps the renderer pure and lets tests assert on
//! exactly what would be drawn.

use tui_flappy_types::{Phase, Rect, BIRD_START_Y, PIPE_H, PIPE_OVERLAP, PIPE_W, WORLD_H, WORLD_W};

/// Everything needed to paint one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub paused: bool,
    pub bird_y: f32,
    pub bird_vy: f32,
    /// Tilt in radians derived from vertical velocity (clamped).
    pub bird_rotation: f32,
    pub pipe_x: f32,
    pub gap_offset: f32,
    pub top_pipe: Rect,
    pub bottom_pipe: Rect,
    pub score: u32,
    pub best: u32,
    pub episode_id: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::NotStarted,
            paused: false,
            bird_y: BIRD_START_Y,
            bird_vy: 0.0,
            bird_rotation: 0.0,
            pipe_x: WORLD_W,
            gap_offset: 0.0,
            top_pipe: Rect::new(WORLD_W, -PIPE_OVERLAP, PIPE_W, PIPE_H),
            bottom_pipe: Rect::new(WORLD_W, WORLD_H - PIPE_OVERLAP, PIPE_W, PIPE_H),
            score: 0,
            best: 0,
            episode_id: 0,
        }
    }
}

impl GameSnapshot {
    /// Coarse content hash for render throttling.
    ///
    /// Two snapshots that would paint the same frame share a fingerprint;
    /// float fields go in as raw bits, which is exact for this purpose.
    pub fn fingerprint(&self) -> u64 {
        // FNV-1a over the fields that affect pixels.
        let mut hash: u64 = 0xcbf29ce484222325;
        let mut mix = |v: u64| {
            hash ^= v;
            hash = hash.wrapping_mul(0x100000001b3);
        };

        mix(self.phase as u64);
        mix(self.paused as u64);
        mix(self.bird_y.to_bits() as u64);
        mix(self.bird_rotation.to_bits() as u64);
        mix(self.pipe_x.to_bits() as u64);
        mix(self.gap_offset.to_bits() as u64);
        mix(self.score as u64);
        mix(self.best as u64);
        hash
    }
}
