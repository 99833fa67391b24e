//! Semi-implicit Euler with border pre-clamping
//!
//! Same discretization as [`super::EulerBall`], but the window-border clamp is
//! fused into the update step: candidate velocity and position are computed,
//! clamped against the bounds, and only then written back. The post-pass
//! border containment the other schemes use still accepts a pre-clamped body
//! as a no-op, so both orders can coexist in one resolver pipeline.

use glam::Vec2;

use crate::consts::{FRICTION_COEFFICIENT, RESTITUTION, SIM_DT};
use crate::error::SimError;
use crate::sim::body::{Body, LaunchParams, validate_radius, validate_step};
use crate::sim::collision::{Bounds, Collide};
use crate::{gravity, launch_velocity};

/// A ball that clamps its candidate state into the window during integration.
#[derive(Debug, Clone)]
pub struct ClampedEulerBall {
    radius: f32,
    position: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    step: f32,
    bounds: Bounds,
}

impl ClampedEulerBall {
    pub fn new(
        radius: f32,
        position: Vec2,
        speed: f32,
        angle: f32,
        bounds: Bounds,
    ) -> Result<Self, SimError> {
        validate_radius(radius)?;
        Ok(Self {
            radius,
            position,
            velocity: launch_velocity(speed, angle),
            acceleration: gravity(),
            step: SIM_DT,
            bounds,
        })
    }
}

impl Body for ClampedEulerBall {
    fn from_launch(params: &LaunchParams, bounds: Bounds) -> Result<Self, SimError> {
        Self::new(
            params.radius,
            params.position,
            params.speed,
            params.angle,
            bounds,
        )
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
        // Candidate state, not yet written back
        let mut velocity = self.velocity + self.acceleration * self.step;
        let mut position = self.position + velocity * self.step;

        let r = self.radius;
        if position.x + r >= self.bounds.width {
            velocity.x *= -RESTITUTION;
            position.x = self.bounds.width - r;
        } else if position.x - r <= 0.0 {
            velocity.x *= -RESTITUTION;
            position.x = r;
        }

        if position.y + r >= self.bounds.height {
            velocity.y *= -RESTITUTION;
            velocity.x *= FRICTION_COEFFICIENT;
            position.y = self.bounds.height - r;
        } else if position.y - r <= 0.0 {
            velocity.y *= -RESTITUTION;
            position.y = r;
        }

        self.position = position;
        self.velocity = velocity;
    }
}

impl Collide for ClampedEulerBall {}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(1000.0, 1000.0)
    }

    #[test]
    fn test_invalid_radius_rejected() {
        assert!(ClampedEulerBall::new(0.0, Vec2::ZERO, 1.0, 0.0, bounds()).is_err());
    }

    #[test]
    fn test_matches_plain_euler_away_from_borders() {
        let mut clamped =
            ClampedEulerBall::new(10.0, Vec2::new(500.0, 200.0), 3.0, 0.5, bounds()).unwrap();
        let mut plain = crate::sim::EulerBall::new(10.0, Vec2::new(500.0, 200.0), 3.0, 0.5).unwrap();

        for _ in 0..10 {
            clamped.integrate();
            plain.integrate();
        }
        assert!((clamped.position() - plain.position()).length() < 1e-3);
        assert!((clamped.velocity() - plain.velocity()).length() < 1e-3);
    }

    #[test]
    fn test_floor_clamp_inside_update_step() {
        // Falling fast enough to cross the floor within one step
        let mut ball =
            ClampedEulerBall::new(10.0, Vec2::new(500.0, 995.0), 0.0, 0.0, bounds()).unwrap();
        ball.set_velocity(Vec2::new(100.0, 600.0));

        ball.integrate();

        assert!((ball.position().y - 990.0).abs() < 1e-3);
        // y reflected with restitution, x damped by floor friction
        assert!(ball.velocity().y < 0.0);
        assert!(ball.velocity().x < 100.0);
    }

    #[test]
    fn test_side_clamp_flips_x_velocity() {
        let mut ball =
            ClampedEulerBall::new(10.0, Vec2::new(995.0, 500.0), 0.0, 0.0, bounds()).unwrap();
        ball.set_velocity(Vec2::new(800.0, 0.0));

        ball.integrate();

        assert!((ball.position().x - 990.0).abs() < 1e-3);
        let expected = -(800.0 * RESTITUTION);
        assert!((ball.velocity().x - expected).abs() < 1.0);
    }
}
