//! Obstacle track - the pipe pair's shared horizontal motion
//!
//! One x position drives both pipe sprites. Motion is explicit per-frame
//! linear movement on the same clock as the bird physics (no animation
//! timeline): the base speed traverses the world right edge to the nominal
//! endpoint in `BASE_CYCLE_MS`, scaled by the caller's speed factor.
//!
//! Crossing the reset threshold ends a cycle: the gap offset is re-drawn
//! from the seeded RNG and the pair snaps back to the right edge. Entering
//! game over freezes the track in place until the next restart.

use tui_flappy_types::{
    Rect, BASE_CYCLE_MS, GAP_OFFSET_MAX, PIPE_END_X, PIPE_H, PIPE_OVERLAP, PIPE_RESET_X, PIPE_W,
    WORLD_H, WORLD_W,
};

use crate::rng::SimpleRng;

#[derive(Debug, Clone)]
pub struct ObstacleTrack {
    /// Left edge of both pipe sprites.
    x: f32,
    /// Vertical displacement of the gap, re-drawn once per cycle.
    gap_offset: f32,
    frozen: bool,
    rng: SimpleRng,
}

impl ObstacleTrack {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let gap_offset = draw_gap_offset(&mut rng);
        Self {
            x: WORLD_W,
            gap_offset,
            frozen: false,
            rng,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn gap_offset(&self) -> f32 {
        self.gap_offset
    }

    pub fn frozen(&self) -> bool {
        self.frozen
    }

    /// Horizontal speed in units/s for a given score-derived factor.
    pub fn speed(speed_factor: f32) -> f32 {
        (WORLD_W - PIPE_END_X) / (BASE_CYCLE_MS as f32 / 1000.0) * speed_factor
    }

    /// Advance the track by `dt_secs`.
    ///
    /// Returns `true` when the reset threshold was crossed this step: the
    /// gap offset has been re-randomized and `x` snapped back to the right
    /// edge. No-op while frozen.
    pub fn advance(&mut self, dt_secs: f32, speed_factor: f32) -> bool {
        if self.frozen || dt_secs <= 0.0 {
            return false;
        }

        let prev = self.x;
        self.x -= Self::speed(speed_factor) * dt_secs;

        if prev >= PIPE_RESET_X && self.x < PIPE_RESET_X {
            self.gap_offset = draw_gap_offset(&mut self.rng);
            self.x = WORLD_W;
            return true;
        }

        false
    }

    /// Freeze the track where it stands. Idempotent.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Snap back to the right edge with a fresh gap and resume motion.
    ///
    /// The RNG stream continues rather than rewinding, so consecutive
    /// episodes see different gap sequences from one seed.
    pub fn reset(&mut self) {
        self.x = WORLD_W;
        self.gap_offset = draw_gap_offset(&mut self.rng);
        self.frozen = false;
    }

    /// Collision rectangle of the upper pipe sprite.
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, self.gap_offset - PIPE_OVERLAP, PIPE_W, PIPE_H)
    }

    /// Collision rectangle of the lower pipe sprite.
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(
            self.x,
            WORLD_H - PIPE_OVERLAP + self.gap_offset,
            PIPE_W,
            PIPE_H,
        )
    }

    /// Current RNG state (for seeding a new game with the same stream).
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    /// Place the track at an arbitrary position.
    #[cfg(test)]
    pub(crate) fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Pin the gap offset.
    #[cfg(test)]
    pub(crate) fn set_gap_offset(&mut self, gap_offset: f32) {
        self.gap_offset = gap_offset;
    }
}

fn draw_gap_offset(rng: &mut SimpleRng) -> f32 {
    rng.next_range_f32(-GAP_OFFSET_MAX, GAP_OFFSET_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_right_edge() {
        let track = ObstacleTrack::new(1);
        assert_eq!(track.x(), WORLD_W);
        assert!(!track.frozen());
    }

    #[test]
    fn initial_gap_is_bounded() {
        for seed in 1..100 {
            let track = ObstacleTrack::new(seed);
            assert!(track.gap_offset().abs() <= GAP_OFFSET_MAX);
        }
    }

    #[test]
    fn advance_moves_left() {
        let mut track = ObstacleTrack::new(1);
        let before = track.x();
        assert!(!track.advance(0.016, 1.0));
        assert!(track.x() < before);
    }

    #[test]
    fn base_speed_traverses_in_cycle_time() {
        // WORLD_W → PIPE_END_X is 630 units over 3 seconds at factor 1.0.
        let expected = (WORLD_W - PIPE_END_X) / 3.0;
        assert!((ObstacleTrack::speed(1.0) - expected).abs() < 1e-4);
        assert!((ObstacleTrack::speed(2.0) - expected * 2.0).abs() < 1e-4);
    }

    #[test]
    fn crossing_threshold_resets_cycle() {
        let mut track = ObstacleTrack::new(1);
        track.set_x(PIPE_RESET_X);
        let old_gap = track.gap_offset();

        assert!(track.advance(0.016, 1.0));
        assert_eq!(track.x(), WORLD_W);
        assert!(track.gap_offset().abs() <= GAP_OFFSET_MAX);
        // One LCG draw from this state will differ from the previous draw.
        assert_ne!(track.gap_offset(), old_gap);
    }

    #[test]
    fn reset_fires_once_per_crossing() {
        let mut track = ObstacleTrack::new(1);
        track.set_x(PIPE_RESET_X + 1.0);

        let mut resets = 0;
        for _ in 0..20 {
            if track.advance(0.016, 1.0) {
                resets += 1;
            }
            if track.x() == WORLD_W {
                break;
            }
        }
        assert_eq!(resets, 1);
    }

    #[test]
    fn frozen_track_does_not_move() {
        let mut track = ObstacleTrack::new(1);
        track.advance(0.5, 1.0);
        track.freeze();
        let x = track.x();
        assert!(!track.advance(1.0, 2.0));
        assert_eq!(track.x(), x);
    }

    #[test]
    fn reset_unfreezes() {
        let mut track = ObstacleTrack::new(1);
        track.freeze();
        track.reset();
        assert!(!track.frozen());
        assert_eq!(track.x(), WORLD_W);
    }

    #[test]
    fn rects_share_x_and_leave_gap() {
        let mut track = ObstacleTrack::new(1);
        track.set_gap_offset(0.0);
        let top = track.top_rect();
        let bottom = track.bottom_rect();

        assert_eq!(top.x, bottom.x);
        let gap = bottom.y - (top.y + top.h);
        assert!((gap - (WORLD_H - PIPE_H)).abs() < 1e-4);
    }

    #[test]
    fn gap_offset_shifts_both_rects_together() {
        let mut track = ObstacleTrack::new(1);
        track.set_gap_offset(0.0);
        let top0 = track.top_rect().y;
        let bottom0 = track.bottom_rect().y;

        track.set_gap_offset(150.0);
        assert_eq!(track.top_rect().y - top0, 150.0);
        assert_eq!(track.bottom_rect().y - bottom0, 150.0);
    }

    #[test]
    fn same_seed_same_gap_sequence() {
        let mut a = ObstacleTrack::new(42);
        let mut b = ObstacleTrack::new(42);
        for _ in 0..10 {
            a.set_x(PIPE_RESET_X);
            b.set_x(PIPE_RESET_X);
            a.advance(0.016, 1.0);
            b.advance(0.016, 1.0);
            assert_eq!(a.gap_offset(), b.gap_offset());
        }
    }
}
