//! Fourth-order Runge-Kutta integration
//!
//! State is the `(position, velocity)` pair; the derivative is
//! `dx/dt = v`, `dv/dt = a` with tick-constant acceleration. Four stage
//! derivatives are combined with weights 1,2,2,1 over the full step. For an
//! unconstrained fall this reproduces the closed-form trajectory to rounding;
//! the same evaluator is reused after contacts rewrite the state at the start
//! of a tick.

use glam::Vec2;

use crate::consts::SIM_DT;
use crate::error::SimError;
use crate::sim::body::{Body, LaunchParams, validate_radius, validate_step};
use crate::sim::collision::{Bounds, Collide};
use crate::{gravity, launch_velocity};

/// Position/velocity pair advanced together
#[derive(Debug, Clone, Copy)]
struct State {
    position: Vec2,
    velocity: Vec2,
}

#[derive(Debug, Clone, Copy, Default)]
struct Derivative {
    dposition: Vec2,
    dvelocity: Vec2,
}

/// A ball advanced by RK4 over its `(position, velocity)` state record.
#[derive(Debug, Clone)]
pub struct Rk4Ball {
    radius: f32,
    state: State,
    acceleration: Vec2,
    step: f32,
}

impl Rk4Ball {
    pub fn new(radius: f32, position: Vec2, speed: f32, angle: f32) -> Result<Self, SimError> {
        validate_radius(radius)?;
        Ok(Self {
            radius,
            state: State {
                position,
                velocity: launch_velocity(speed, angle),
            },
            acceleration: gravity(),
            step: SIM_DT,
        })
    }

    /// Stage evaluator: advance the stored state by `dt` along `derivative`,
    /// then report the derivative at that point.
    fn evaluate(&self, dt: f32, derivative: Derivative) -> Derivative {
        Derivative {
            dposition: self.state.velocity + derivative.dvelocity * dt,
            dvelocity: self.acceleration,
        }
    }
}

impl Body for Rk4Ball {
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
        self.state.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.state.position = position;
    }

    fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.state.velocity = velocity;
    }

    fn integrate(&mut self) {
        let a = self.evaluate(0.0, Derivative::default());
        let b = self.evaluate(self.step * 0.5, a);
        let c = self.evaluate(self.step * 0.5, b);
        let d = self.evaluate(self.step, c);

        let dxdt = (a.dposition + 2.0 * (b.dposition + c.dposition) + d.dposition) / 6.0;
        let dvdt = (a.dvelocity + 2.0 * (b.dvelocity + c.dvelocity) + d.dvelocity) / 6.0;

        self.state.position += dxdt * self.step;
        self.state.velocity += dvdt * self.step;
    }
}

impl Collide for Rk4Ball {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_radius_rejected() {
        assert!(Rk4Ball::new(-2.0, Vec2::ZERO, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_accessors_agree_with_state_record() {
        let mut ball = Rk4Ball::new(8.0, Vec2::new(50.0, 60.0), 10.0, 0.0).unwrap();
        assert_eq!(ball.position(), Vec2::new(50.0, 60.0));

        ball.set_position(Vec2::new(70.0, 80.0));
        ball.set_velocity(Vec2::new(-30.0, 40.0));
        assert_eq!(ball.position(), Vec2::new(70.0, 80.0));
        assert_eq!(ball.velocity(), Vec2::new(-30.0, 40.0));

        ball.integrate();
        // Accessors keep tracking the internal record after integration
        assert_eq!(ball.position(), ball.state.position);
        assert_eq!(ball.velocity(), ball.state.velocity);
    }

    #[test]
    fn test_free_fall_is_exact_for_constant_acceleration() {
        let x0 = Vec2::new(100.0, 100.0);
        let mut ball = Rk4Ball::new(5.0, x0, 10.0, 0.2).unwrap();
        let v0 = ball.velocity();
        let a = gravity();
        let dt = ball.step();

        let n = 120; // one second
        for _ in 0..n {
            ball.integrate();
        }

        let t = n as f32 * dt;
        let expected = x0 + v0 * t + 0.5 * a * t * t;
        // Quadratic trajectories are integrated exactly; only rounding remains
        assert!((ball.position() - expected).length() < 0.1);
        assert!((ball.velocity() - (v0 + a * t)).length() < 0.1);
    }
}
