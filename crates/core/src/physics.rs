//! Physics module - bird motion under constant gravity
//!
//! One integration step per tick. The update order is load-bearing: the
//! position advances by the pre-update velocity, then gravity is applied.

use tui_flappy_types::{GRAVITY, ROTATION_MAX_RAD, ROTATION_VY_SPAN};

/// Advance `(bird_y, bird_vy)` by `dt_secs` and return the new pair.
///
/// ```
/// use tui_flappy_core::physics::integrate;
///
/// let (y, vy) = integrate(100.0, 0.0, 0.1);
/// assert_eq!(y, 100.0);  // position uses the pre-update velocity
/// assert_eq!(vy, 50.0);
/// ```
pub fn integrate(bird_y: f32, bird_vy: f32, dt_secs: f32) -> (f32, f32) {
    let y = bird_y + bird_vy * dt_secs;
    let vy = bird_vy + GRAVITY * dt_secs;
    (y, vy)
}

/// Linear interpolation from `a` to `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map `v` from `[in_min, in_max]` onto `[out_min, out_max]`, clamping
/// outside the input range.
pub fn remap_clamped(v: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let t = ((v - in_min) / (in_max - in_min)).clamp(0.0, 1.0);
    lerp(out_min, out_max, t)
}

/// Bird tilt in radians derived from vertical velocity.
///
/// Velocities in `[-500, 500]` map linearly onto `[-0.5, 0.5]` rad; anything
/// faster clamps, so a long fall pins the nose down rather than spinning.
pub fn bird_rotation(bird_vy: f32) -> f32 {
    remap_clamped(
        bird_vy,
        -ROTATION_VY_SPAN,
        ROTATION_VY_SPAN,
        -ROTATION_MAX_RAD,
        ROTATION_MAX_RAD,
    )
}
