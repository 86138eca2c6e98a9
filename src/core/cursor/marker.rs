//=========================================================================
// Cursor Marker
//=========================================================================
//
// Visual part of the cursor: where it is drawn, where it is heading,
// and whether it is drawn at all.
//
//=========================================================================

use glam::Vec3;

use crate::core::math::{approx_eq, smooth_damp};

/// Smoothly damped marker position.
#[derive(Debug, Clone)]
pub struct Marker {
    position: Vec3,
    target: Vec3,
    velocity: Vec3,
    visible: bool,
}

impl Marker {
    /// Creates a visible marker at rest on `position`.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            target: position,
            velocity: Vec3::ZERO,
            visible: true,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_settled(&self) -> bool {
        approx_eq(self.position, self.target)
    }

    /// Places the marker without animation.
    pub fn snap_to(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Advances one smoothing step toward the target.
    pub fn step(&mut self, smooth_time: f32, delta: f32) {
        if self.is_settled() {
            return;
        }
        self.position = smooth_damp(
            self.position,
            self.target,
            &mut self.velocity,
            smooth_time,
            f32::INFINITY,
            delta,
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_marker_is_settled_and_visible() {
        let marker = Marker::new(Vec3::new(1.0, 2.0, 3.0));
        assert!(marker.is_settled());
        assert!(marker.is_visible());
    }

    #[test]
    fn step_glides_to_target() {
        let mut marker = Marker::new(Vec3::ZERO);
        marker.set_target(Vec3::new(0.0, 4.0, 0.0));

        marker.step(0.1, 1.0 / 60.0);
        let first = marker.position();
        assert!(first.y > 0.0 && first.y < 4.0);

        for _ in 0..600 {
            marker.step(0.1, 1.0 / 60.0);
        }
        assert!(marker.is_settled());
    }

    #[test]
    fn settled_marker_does_not_move() {
        let mut marker = Marker::new(Vec3::new(5.0, 0.0, 0.0));
        marker.step(0.1, 1.0 / 60.0);
        assert_eq!(marker.position(), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn snap_keeps_target() {
        let mut marker = Marker::new(Vec3::ZERO);
        marker.set_target(Vec3::new(1.0, 0.0, 0.0));
        marker.snap_to(Vec3::new(1.0, 0.0, 0.0));
        assert!(marker.is_settled());
    }
}
