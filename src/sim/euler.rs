//! Symplectic Euler integration
//!
//! The velocity update runs before the position update, so the position step
//! uses the already-advanced velocity. This ordering is what keeps the energy
//! behavior bounded; reordering the two lines yields the unstable explicit
//! form.

use glam::Vec2;

use crate::error::SimError;
use crate::sim::body::{Body, LaunchParams, validate_radius, validate_step};
use crate::sim::collision::{Bounds, Collide};
use crate::{consts::SIM_DT, gravity, launch_velocity};

/// A ball advanced by symplectic Euler:
/// `v' = v + a·dt`, then `x' = x + v'·dt`.
#[derive(Debug, Clone)]
pub struct EulerBall {
    radius: f32,
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    step: f32,
}

impl EulerBall {
    pub fn new(radius: f32, position: Vec2, speed: f32, angle: f32) -> Result<Self, SimError> {
        validate_radius(radius)?;
        Ok(Self {
            radius,
            position,
            velocity: launch_velocity(speed, angle),
            acceleration: gravity(),
            step: SIM_DT,
        })
    }
}

impl Body for EulerBall {
    fn from_launch(params: &LaunchParams, _bounds: Bounds) -> Result<Self, SimError> {
        Self::new(params.radius, params.position, params.speed, params.angle)
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn step(&self) -> f32 {
        self.step
    }

    fn set_step(&mut self, step: f32) -> Result<(), SimError> {
        validate_step(step)?;
        self.step = step;
        Ok(())
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn integrate(&mut self) {
        // Velocity first. Do not reorder.
        self.velocity += self.acceleration * self.step;
        self.position += self.velocity * self.step;
    }
}

impl Collide for EulerBall {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_radius_rejected() {
        assert!(EulerBall::new(0.0, Vec2::ZERO, 1.0, 0.0).is_err());
        assert!(EulerBall::new(-1.0, Vec2::ZERO, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_single_step_uses_updated_velocity() {
        let mut ball = EulerBall::new(5.0, Vec2::new(100.0, 100.0), 0.0, 0.0).unwrap();
        let dt = ball.step();
        let a = gravity();

        ball.integrate();

        // x1 = x0 + (v0 + a dt) dt, the symplectic form
        let expected_v = a * dt;
        let expected_x = Vec2::new(100.0, 100.0) + expected_v * dt;
        assert!((ball.velocity() - expected_v).length() < 1e-4);
        assert!((ball.position() - expected_x).length() < 1e-4);
    }

    #[test]
    fn test_initial_velocity_from_speed_and_angle() {
        let ball = EulerBall::new(5.0, Vec2::ZERO, 10.0, 0.0).unwrap();
        assert!((ball.velocity().x - 1000.0).abs() < 0.001);
        assert!(ball.velocity().y.abs() < 0.001);
    }

    #[test]
    fn test_free_fall_error_shrinks_with_step() {
        let error_for = |dt: f32| {
            let x0 = Vec2::new(100.0, 100.0);
            let mut ball = EulerBall::new(5.0, x0, 10.0, 0.0).unwrap();
            let v0 = ball.velocity();
            ball.set_step(dt).unwrap();

            let steps = (1.0 / dt).round() as u32;
            for _ in 0..steps {
                ball.integrate();
            }

            let closed_form = x0 + v0 + 0.5 * gravity(); // t = 1
            (ball.position() - closed_form).length()
        };

        let coarse = error_for(1.0 / 128.0);
        let fine = error_for(1.0 / 256.0);
        // First-order scheme: halving the step roughly halves the error
        assert!(fine < coarse);
        assert!((coarse / fine - 2.0).abs() < 0.3);
    }

    #[test]
    fn test_set_step_validates() {
        let mut ball = EulerBall::new(5.0, Vec2::ZERO, 0.0, 0.0).unwrap();
        assert!(ball.set_step(1.0 / 60.0).is_ok());
        assert!((ball.step() - 1.0 / 60.0).abs() < 1e-9);
        assert!(ball.set_step(0.0).is_err());
        assert!(ball.set_step(f32::NAN).is_err());
    }
}
