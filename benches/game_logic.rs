use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_flappy::core::{GameSnapshot, GameState};
use tui_flappy::term::{FrameBuffer, GameView, Viewport};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.flap();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
            // Keep the bird aloft so the bench stays in the playing phase.
            if state.bird_y() > 600.0 {
                state.flap();
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.flap();
    state.tick(16);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.flap();
    state.tick(16);
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(120, 36);

    c.bench_function("render_120x36", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(120, 36), &mut fb);
        })
    });
}

criterion_group!(benches, bench_tick, bench_snapshot, bench_render);
criterion_main!(benches);
