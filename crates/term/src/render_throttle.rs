//! Redraw throttling for static screens.
//!
//! While the game is animating every frame must be drawn. On the title,
//! pause and game-over screens nothing moves, so the loop only redraws when
//! the content fingerprint changes or a keep-alive interval elapses (the
//! latter repairs terminals that lose cells to external writes).

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    keep_alive_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(keep_alive_ms: u64) -> Self {
        Self {
            keep_alive_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - `is_static=false`: always render.
    /// - `is_static=true`: render on fingerprint change, otherwise at most
    ///   once per keep-alive interval.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        if !self.has_rendered || !is_static || fingerprint != self.last_fingerprint {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.keep_alive_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }
}
