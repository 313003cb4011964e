//! GameView: maps a core `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The world is drawn by sampling two vertical world positions per terminal
//! row and emitting the upper-half-block glyph, so each cell carries two
//! pixels (fg = top, bg = bottom). Text (score, overlays) goes on top as
//! ordinary styled cells.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, Rect, BIRD_H, BIRD_W, BIRD_X, GROUND_Y, WORLD_H, WORLD_W};

const HALF_BLOCK: char = '\u{2580}'; // ▀

// Scene palette.
const SKY_TOP: Rgb = Rgb::new(74, 186, 202);
const SKY_BOTTOM: Rgb = Rgb::new(214, 241, 230);
const GRASS: Rgb = Rgb::new(96, 180, 62);
const GRASS_DARK: Rgb = Rgb::new(78, 156, 48);
const DIRT: Rgb = Rgb::new(206, 182, 112);
const DIRT_DARK: Rgb = Rgb::new(182, 158, 92);
const PIPE_LIGHT: Rgb = Rgb::new(132, 204, 56);
const PIPE_DARK: Rgb = Rgb::new(62, 110, 28);
const PIPE_RIM: Rgb = Rgb::new(46, 84, 20);
const BIRD_BODY: Rgb = Rgb::new(246, 200, 62);
const BIRD_LIGHT: Rgb = Rgb::new(255, 228, 112);
const BIRD_WING: Rgb = Rgb::new(214, 162, 36);
const BIRD_BEAK: Rgb = Rgb::new(230, 106, 44);
const BIRD_EYE: Rgb = Rgb::new(250, 250, 250);

/// Depth of the grass strip below the ground line, in world units.
const GRASS_DEPTH: f32 = 18.0;

/// Depth of the darker rim band at a pipe's gap-facing end, in world units.
const PIPE_RIM_DEPTH: f32 = 26.0;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders snapshots into framebuffers; holds no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers reuse one framebuffer
    /// across frames; it is resized to the viewport as needed.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        // World units per terminal pixel; rows carry two pixels each.
        let sx = WORLD_W / viewport.width as f32;
        let sy = WORLD_H / (viewport.height as f32 * 2.0);

        for row in 0..viewport.height {
            for col in 0..viewport.width {
                let wx = (col as f32 + 0.5) * sx;
                let top = sample(snap, wx, (row as f32 * 2.0 + 0.5) * sy);
                let bottom = sample(snap, wx, (row as f32 * 2.0 + 1.5) * sy);
                fb.set(
                    col,
                    row,
                    Cell {
                        ch: HALF_BLOCK,
                        style: CellStyle {
                            fg: top,
                            bg: bottom,
                            bold: false,
                        },
                    },
                );
            }
        }

        self.draw_hud(snap, fb);
        match snap.phase {
            Phase::NotStarted => self.draw_title(fb),
            Phase::Playing if snap.paused => self.draw_pause(fb),
            Phase::Playing => {}
            Phase::GameOver => self.draw_game_over(snap, fb),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        let w = fb.width();
        let label = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(36, 56, 66),
            bold: true,
        };

        // Score, centered on the top row.
        let score_w = u32_width(snap.score);
        let x = (w.saturating_sub(score_w)) / 2;
        fb.put_u32(x, 0, snap.score, label);

        // Session best in the corner, once there is one.
        if snap.best > 0 {
            let total = 5 + u32_width(snap.best);
            if w > total {
                let x = w - total - 1;
                fb.put_str(x, 0, "BEST ", label);
                fb.put_u32(x + 5, 0, snap.best, label);
            }
        }
    }

    fn draw_title(&self, fb: &mut FrameBuffer) {
        let mid = fb.height() / 2;
        self.put_centered(fb, mid.saturating_sub(1), "T U I   F L A P P Y", banner_style());
        self.put_centered(fb, mid + 1, "SPACE TO FLAP", plain_style());
        self.put_centered(fb, mid + 2, "P PAUSE   Q QUIT", plain_style());
    }

    fn draw_pause(&self, fb: &mut FrameBuffer) {
        dim_scene(fb);
        self.put_centered(fb, fb.height() / 2, "PAUSED", banner_style());
    }

    fn draw_game_over(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        dim_scene(fb);
        let mid = fb.height() / 2;
        self.put_centered(fb, mid.saturating_sub(1), "GAME OVER", banner_style());

        // "SCORE <n>  BEST <n>" composed without allocating.
        let score_w = u32_width(snap.score);
        let best_w = u32_width(snap.best);
        let total = 6 + score_w + 2 + 5 + best_w;
        let x = fb.width().saturating_sub(total) / 2;
        let style = plain_style();
        fb.put_str(x, mid + 1, "SCORE ", style);
        let n = fb.put_u32(x + 6, mid + 1, snap.score, style);
        fb.put_str(x + 6 + n + 2, mid + 1, "BEST ", style);
        fb.put_u32(x + 6 + n + 2 + 5, mid + 1, snap.best, style);

        self.put_centered(fb, mid + 3, "SPACE TO RESTART", plain_style());
    }

    fn put_centered(&self, fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = fb.width().saturating_sub(text_w) / 2;
        fb.put_str(x, y, text, style);
    }
}

fn banner_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(20, 30, 36),
        bold: true,
    }
}

fn plain_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(235, 235, 235),
        bg: Rgb::new(20, 30, 36),
        bold: false,
    }
}

/// Darken the whole scene so overlay text reads.
fn dim_scene(fb: &mut FrameBuffer) {
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            if let Some(mut cell) = fb.get(x, y) {
                cell.style.fg = cell.style.fg.dimmed();
                cell.style.bg = cell.style.bg.dimmed();
                fb.set(x, y, cell);
            }
        }
    }
}

/// Color of one world position. Paint order: bird, ground, pipes, sky.
fn sample(snap: &GameSnapshot, wx: f32, wy: f32) -> Rgb {
    if let Some(c) = sample_bird(snap, wx, wy) {
        return c;
    }
    if wy >= GROUND_Y {
        return ground_color(snap, wx, wy);
    }
    if let Some(c) = sample_pipe(&snap.top_pipe, wx, wy, true) {
        return c;
    }
    if let Some(c) = sample_pipe(&snap.bottom_pipe, wx, wy, false) {
        return c;
    }
    sky_color(wy)
}

fn sample_bird(snap: &GameSnapshot, wx: f32, wy: f32) -> Option<Rgb> {
    let cx = BIRD_X + BIRD_W / 2.0;
    let cy = snap.bird_y + BIRD_H / 2.0;
    let lx = wx - cx;
    // Small-angle shear stands in for true rotation.
    let ly = (wy - cy) - lx * snap.bird_rotation;

    if lx.abs() > BIRD_W / 2.0 || ly.abs() > BIRD_H / 2.0 {
        return None;
    }

    // Beak: front quarter, middle band.
    if lx > BIRD_W / 2.0 - 10.0 && ly.abs() < 5.0 {
        return Some(BIRD_BEAK);
    }
    // Eye: upper front.
    if lx > BIRD_W / 2.0 - 20.0 && lx < BIRD_W / 2.0 - 11.0 && ly < -2.0 && ly > -9.0 {
        return Some(BIRD_EYE);
    }
    // Wing: rear middle; flips up while climbing.
    let wing_center = if snap.bird_vy < 0.0 { -3.0 } else { 3.0 };
    if lx < -4.0 && lx > -BIRD_W / 2.0 + 4.0 && (ly - wing_center).abs() < 4.0 {
        return Some(BIRD_WING);
    }
    // Highlight crown.
    if ly < -BIRD_H / 2.0 + 6.0 {
        return Some(BIRD_LIGHT);
    }
    Some(BIRD_BODY)
}

fn sample_pipe(rect: &Rect, wx: f32, wy: f32, gap_below: bool) -> Option<Rgb> {
    if !rect.contains(wx, wy) {
        return None;
    }

    // Rim band along the gap-facing end.
    let rim = if gap_below {
        rect.y + rect.h - wy < PIPE_RIM_DEPTH
    } else {
        wy - rect.y < PIPE_RIM_DEPTH
    };
    if rim {
        return Some(PIPE_RIM);
    }

    // Cylindrical shine peaking left of center.
    let t = ((wx - rect.x) / rect.w).clamp(0.0, 1.0);
    let shine = (1.0 - (t - 0.3).abs() * 1.8).clamp(0.0, 1.0);
    Some(PIPE_DARK.lerp(PIPE_LIGHT, shine))
}

fn ground_color(snap: &GameSnapshot, wx: f32, wy: f32) -> Rgb {
    // Tie the pattern to the pipe position so the floor scrolls with it.
    let scroll = wx - snap.pipe_x;
    if wy < GROUND_Y + GRASS_DEPTH {
        if stripe(scroll, 24.0) {
            GRASS
        } else {
            GRASS_DARK
        }
    } else if stripe(scroll + (wy - GROUND_Y) * 2.0, 48.0) {
        DIRT
    } else {
        DIRT_DARK
    }
}

fn sky_color(wy: f32) -> Rgb {
    SKY_TOP.lerp(SKY_BOTTOM, (wy / GROUND_Y).clamp(0.0, 1.0))
}

fn stripe(v: f32, period: f32) -> bool {
    v.rem_euclid(period * 2.0) < period
}

fn u32_width(mut n: u32) -> u16 {
    let mut w = 1;
    while n >= 10 {
        n /= 10;
        w += 1;
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sky_gradient_brightens_downward() {
        let high = sky_color(10.0);
        let low = sky_color(600.0);
        assert!(low.r >= high.r && low.g >= high.g);
    }

    #[test]
    fn ground_starts_at_ground_line() {
        let snap = GameSnapshot::default();
        let above = sample(&snap, 10.0, GROUND_Y - 1.0);
        let below = sample(&snap, 10.0, GROUND_Y + 1.0);
        assert_ne!(above, below);
        assert!(below == GRASS || below == GRASS_DARK);
    }

    #[test]
    fn bird_occupies_its_rect() {
        let snap = GameSnapshot::default();
        let cx = BIRD_X + BIRD_W / 2.0;
        let cy = snap.bird_y + BIRD_H / 2.0;
        assert!(sample_bird(&snap, cx, cy).is_some());
        assert!(sample_bird(&snap, cx, cy + BIRD_H).is_none());
        assert!(sample_bird(&snap, cx - BIRD_W, cy).is_none());
    }

    #[test]
    fn pipe_rim_faces_the_gap() {
        let top = Rect::new(100.0, -320.0, 104.0, 640.0);
        // Just inside the bottom end of the top pipe: rim.
        assert_eq!(sample_pipe(&top, 150.0, 319.0, true), Some(PIPE_RIM));
        // Well inside the body: shaded green, not rim.
        assert_ne!(sample_pipe(&top, 150.0, 0.0, true), Some(PIPE_RIM));
        // Outside.
        assert_eq!(sample_pipe(&top, 150.0, 321.0, true), None);
    }

    #[test]
    fn u32_width_counts_digits() {
        assert_eq!(u32_width(0), 1);
        assert_eq!(u32_width(9), 1);
        assert_eq!(u32_width(10), 2);
        assert_eq!(u32_width(12345), 5);
    }
}
