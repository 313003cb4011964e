//! Collision policy and score-crossing semantics.

use tui_flappy::core::{bird_center, crossed_score_line, hits_bounds, hits_pipes};
use tui_flappy::types::{Rect, BIRD_W, BIRD_X, GROUND_Y};

#[test]
fn ground_contact_is_inclusive() {
    assert!(hits_bounds(GROUND_Y));
    assert!(!hits_bounds(GROUND_Y - 1.0));
}

#[test]
fn ceiling_contact_is_inclusive() {
    assert!(hits_bounds(0.0));
    assert!(!hits_bounds(1.0));
}

#[test]
fn pipe_edge_contact_counts_as_collision() {
    let top = Rect::new(100.0, -320.0, 104.0, 640.0);
    let bottom = Rect::new(100.0, 480.0, 104.0, 640.0);

    // Exactly on the top pipe's lower edge.
    assert!(hits_pipes(120.0, 320.0, &top, &bottom));
    // Exactly on a pipe's left edge.
    assert!(hits_pipes(100.0, 0.0, &top, &bottom));
    // One unit inside the gap on both sides.
    assert!(!hits_pipes(120.0, 321.0, &top, &bottom));
    assert!(!hits_pipes(120.0, 479.0, &top, &bottom));
}

#[test]
fn bird_center_offsets_from_sprite_origin() {
    let (cx, cy) = bird_center(100.0);
    assert_eq!(cx, BIRD_X + BIRD_W / 2.0);
    assert_eq!(cy, 112.0);
}

#[test]
fn score_scenario_fires_exactly_once() {
    // Bird x fixed at 0; pipe positions per tick: 10, -5, -50.
    let positions = [10.0_f32, -5.0, -50.0];
    let mut fired = 0;
    for pair in positions.windows(2) {
        if crossed_score_line(pair[0], pair[1], 0.0) {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);
    // And specifically on the 10 → -5 step.
    assert!(crossed_score_line(10.0, -5.0, 0.0));
}

#[test]
fn unchanged_reads_never_fire() {
    assert!(!crossed_score_line(-5.0, -5.0, 0.0));
    assert!(!crossed_score_line(0.0, 0.0, 0.0));
}

#[test]
fn landing_exactly_on_the_line_fires() {
    assert!(crossed_score_line(3.0, 0.0, 0.0));
}

#[test]
fn rightward_jumps_never_fire() {
    // The cycle snap-back moves the pipe from far left to the right edge.
    assert!(!crossed_score_line(-120.0, 480.0, 0.0));
}
