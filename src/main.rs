//! Terminal Flappy Bird runner (default binary).
//!
//! One fixed-timestep loop owns the game state and serializes input, tick
//! and render, so the collision monitor always reads positions written in
//! the same frame. Uses crossterm for input and a framebuffer-based diff
//! renderer (no widget library).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_flappy::core::{GameSnapshot, GameState};
use tui_flappy::input::{handle_key_event, should_quit};
use tui_flappy::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_flappy::types::{MAX_FRAME_MS, TICK_MS};

/// Keep-alive interval for static screens (title, pause, game over).
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(seed_from_clock());
    let view = GameView::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let epoch = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut force_render = true;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        let is_static = !snap.phase.is_playing() || snap.paused;
        let now_ms = epoch.elapsed().as_millis() as u64;
        if force_render || throttle.should_render(now_ms, snap.fingerprint(), is_static) {
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            force_render = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = handle_key_event(key) {
                            game.apply_action(action);
                        }
                    }
                    // A held key is not a tap.
                    KeyEventKind::Repeat | KeyEventKind::Release => {}
                },
                Event::Resize(..) => {
                    term.invalidate();
                    force_render = true;
                }
                _ => {}
            }
        }

        // Tick with the measured elapsed time, clamped.
        if last_tick.elapsed() >= tick_duration {
            let elapsed_ms = (last_tick.elapsed().as_millis() as u32).min(MAX_FRAME_MS);
            last_tick = Instant::now();
            game.tick(elapsed_ms);
        }
    }
}

/// Seed the gap sequence from the wall clock so every session differs.
fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
