use glam::Vec2;

use crate::constants::{FRAME_DT_CLAMP_SECS, SPRING_MAX_STEP_SECS};

/// Damped second-order interpolation of a displayed position toward a target.
///
/// Semi-implicit Euler, substepped so that a long frame gap (background tab,
/// debugger pause) cannot destabilize the integration.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    pub position: Vec2,
    pub velocity: Vec2,
    stiffness: f32,
    damping: f32,
    mass: f32,
}

impl Spring2 {
    pub fn new(initial: Vec2, stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            position: initial,
            velocity: Vec2::ZERO,
            stiffness,
            damping,
            mass,
        }
    }

    /// Advance the spring by `dt` seconds toward `target`.
    pub fn step(&mut self, target: Vec2, dt: f32) {
        let mut remaining = dt.clamp(0.0, FRAME_DT_CLAMP_SECS);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_MAX_STEP_SECS);
            let accel = (self.stiffness * (target - self.position) - self.damping * self.velocity)
                / self.mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
    }

    /// Whether the displayed position has effectively reached `target`.
    #[inline]
    pub fn settled(&self, target: Vec2, epsilon: f32) -> bool {
        (target - self.position).length() <= epsilon && self.velocity.length() <= epsilon
    }
}
