//=========================================================================
// Math
//=========================================================================
//
// Interpolation helpers over `glam::Vec3` used by the cursor marker.
//
// Contents:
//   approx_eq()   → epsilon comparison of two points
//   smooth_damp() → critically damped spring step toward a target
//   idle_offset() → horizontal sway of an idle cursor
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Constants ===========================================================

/// Squared distance below which two points are treated as identical.
const APPROX_EQ_SQR: f32 = 1e-10;

/// Lower bound for the smoothing time (avoids division by zero).
const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Angular speed of the idle sway (radians per second).
pub const IDLE_SPEED_FACTOR: f32 = 8.0;

/// Sway amplitude as a fraction of the viewport width.
pub const IDLE_MOVEMENT_FACTOR: f32 = 0.003;

//=== approx_eq() =========================================================

/// Returns `true` if both points are closer than the engine epsilon.
///
/// Exact float equality is never reached by an exponential filter, so
/// marker motion compares with this instead of `==`.
#[inline]
pub fn approx_eq(a: Vec3, b: Vec3) -> bool {
    a.distance_squared(b) < APPROX_EQ_SQR
}

//=== smooth_damp() =======================================================

/// Moves `current` toward `target` with a critically damped spring.
///
/// `velocity` is the filter state and must be kept by the caller between
/// calls. `smooth_time` is roughly the time needed to reach the target.
/// Pass `f32::INFINITY` as `max_speed` to leave the speed unclamped.
///
/// The result never overshoots: if a step would cross the target the
/// output lands exactly on it and the velocity is reset.
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    max_speed: f32,
    delta: f32,
) -> Vec3 {
    if delta <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    // Cubic approximation of exp(-omega * delta)
    let x = omega * delta;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let original_target = target;
    let mut change = current - target;

    let max_change = max_speed * smooth_time;
    let change_len_sq = change.length_squared();
    if change_len_sq > max_change * max_change {
        change = change * (max_change / change_len_sq.sqrt());
    }

    let target = current - change;
    let temp = (*velocity + change * omega) * delta;
    *velocity = (*velocity - temp * omega) * exp;

    let mut output = target + (change + temp) * exp;

    // Overshoot guard
    if (original_target - current).dot(output - original_target) > 0.0 {
        output = original_target;
        *velocity = Vec3::ZERO;
    }

    output
}

//=== idle_offset() =======================================================

/// Horizontal sway applied to an idle cursor at `time` seconds.
#[inline]
pub fn idle_offset(time: f32, viewport_width: f32) -> f32 {
    (time * IDLE_SPEED_FACTOR).sin() * viewport_width * IDLE_MOVEMENT_FACTOR
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn approx_eq_tolerates_float_noise() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        assert!(approx_eq(a, Vec3::new(1.0, 1.0, 1.000_001)));
        assert!(!approx_eq(a, Vec3::new(1.0, 1.0, 1.01)));
    }

    #[test]
    fn smooth_damp_moves_toward_target() {
        let mut velocity = Vec3::ZERO;
        let target = Vec3::new(10.0, 0.0, 0.0);

        let next = smooth_damp(Vec3::ZERO, target, &mut velocity, 0.2, f32::INFINITY, DT);

        assert!(next.x > 0.0 && next.x < 10.0);
        assert!(velocity.x > 0.0);
    }

    #[test]
    fn smooth_damp_converges_without_overshoot() {
        let mut velocity = Vec3::ZERO;
        let target = Vec3::new(0.0, -5.0, 2.0);
        let mut pos = Vec3::new(0.0, 5.0, 2.0);

        for _ in 0..600 {
            pos = smooth_damp(pos, target, &mut velocity, 0.1, f32::INFINITY, DT);
            assert!(pos.y >= target.y);
        }

        assert!(pos.distance(target) < 1e-3);
    }

    #[test]
    fn smooth_damp_respects_max_speed() {
        let mut velocity = Vec3::ZERO;
        let target = Vec3::new(100.0, 0.0, 0.0);

        let next = smooth_damp(Vec3::ZERO, target, &mut velocity, 0.1, 1.0, DT);

        // One second of travel at most one unit
        assert!(next.x <= 1.0 * DT + 1e-4);
    }

    #[test]
    fn smooth_damp_zero_delta_is_noop() {
        let mut velocity = Vec3::new(1.0, 0.0, 0.0);
        let pos = Vec3::new(2.0, 0.0, 0.0);

        assert_eq!(smooth_damp(pos, Vec3::ZERO, &mut velocity, 0.1, f32::INFINITY, 0.0), pos);
        assert_eq!(velocity, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn idle_offset_scales_with_viewport() {
        assert_eq!(idle_offset(0.0, 1920.0), 0.0);

        let quarter = std::f32::consts::FRAC_PI_2 / IDLE_SPEED_FACTOR;
        let peak = idle_offset(quarter, 1000.0);
        assert!((peak - 3.0).abs() < 1e-4);
    }
}
