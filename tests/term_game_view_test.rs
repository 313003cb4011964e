//! Rendering smoke tests: the view is pure, so we can assert on cells.

use tui_flappy::core::{GameSnapshot, GameState};
use tui_flappy::term::{FrameBuffer, GameView, Viewport};
use tui_flappy::types::Phase;

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).unwrap().ch)
        .collect()
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| row_text(fb, y) + "\n").collect()
}

#[test]
fn renders_into_any_viewport_without_panicking() {
    let view = GameView::default();
    let snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    for (w, h) in [(0, 0), (1, 1), (5, 3), (80, 24), (300, 90)] {
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

#[test]
fn title_screen_shows_prompt() {
    let view = GameView::default();
    let snap = GameSnapshot::default();
    let fb = view.render(&snap, Viewport::new(80, 24));

    let text = screen_text(&fb);
    assert!(text.contains("SPACE TO FLAP"));
}

#[test]
fn playing_screen_shows_score() {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    snap.phase = Phase::Playing;
    snap.score = 42;
    let fb = view.render(&snap, Viewport::new(80, 24));

    assert!(row_text(&fb, 0).contains("42"));
    assert!(!screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn game_over_screen_shows_results() {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    snap.phase = Phase::GameOver;
    snap.score = 7;
    snap.best = 31;
    let fb = view.render(&snap, Viewport::new(80, 24));

    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("SCORE 7"));
    assert!(text.contains("BEST 31"));
    assert!(text.contains("SPACE TO RESTART"));
}

#[test]
fn paused_screen_shows_banner() {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    snap.phase = Phase::Playing;
    snap.paused = true;
    let fb = view.render(&snap, Viewport::new(80, 24));

    assert!(screen_text(&fb).contains("PAUSED"));
}

#[test]
fn world_cells_use_half_blocks() {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    snap.phase = Phase::Playing;
    let fb = view.render(&snap, Viewport::new(40, 12));

    // Away from the HUD row everything is sampled world pixels.
    let mid = row_text(&fb, 6);
    assert!(mid.chars().all(|c| c == '\u{2580}'));
}

#[test]
fn moving_the_pipe_changes_some_cells() {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    snap.phase = Phase::Playing;
    snap.pipe_x = 200.0;
    snap.top_pipe.x = 200.0;
    snap.bottom_pipe.x = 200.0;
    let a = view.render(&snap, Viewport::new(80, 24));

    snap.pipe_x = 150.0;
    snap.top_pipe.x = 150.0;
    snap.bottom_pipe.x = 150.0;
    let b = view.render(&snap, Viewport::new(80, 24));

    assert_ne!(a.cells(), b.cells());
}

#[test]
fn live_snapshot_renders() {
    let mut game = GameState::new(5);
    game.flap();
    for _ in 0..30 {
        game.tick(16);
    }

    let view = GameView::default();
    let fb = view.render(&game.snapshot(), Viewport::new(100, 30));
    assert!(row_text(&fb, 0).contains('0'));
}
