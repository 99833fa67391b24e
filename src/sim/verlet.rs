//! Position Verlet integration
//!
//! No stored velocity: the scheme carries `(position, previous_position)` and
//! derives velocity as `(position - previous_position) / step` on demand.
//! `previous_position` is seeded as `position - v0·step` so the first step
//! reproduces the initial velocity.

use glam::Vec2;

use crate::consts::{EPSILON, SIM_DT};
use crate::error::SimError;
use crate::sim::body::{Body, LaunchParams, validate_radius, validate_step};
use crate::sim::collision::{Bounds, Collide};
use crate::{gravity, launch_velocity};

/// A ball advanced by position Verlet:
/// `x' = 2x - x_prev + a·dt²`.
#[derive(Debug, Clone)]
pub struct VerletBall {
    radius: f32,
    position: Vec2,
    previous_position: Vec2,
    acceleration: Vec2,
    step: f32,
}

impl VerletBall {
    pub fn new(radius: f32, position: Vec2, speed: f32, angle: f32) -> Result<Self, SimError> {
        validate_radius(radius)?;
        let step = SIM_DT;
        let velocity = launch_velocity(speed, angle);
        Ok(Self {
            radius,
            position,
            previous_position: position - velocity * step,
            acceleration: gravity(),
            step,
        })
    }
}

impl Body for VerletBall {
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
        // Rescale the history so the derived velocity survives the change.
        let velocity = self.velocity();
        self.step = step;
        self.previous_position = self.position - velocity * step;
        Ok(())
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    /// Moves the body without touching the history: position-based corrections
    /// shift the derived velocity implicitly, which is the point of the scheme.
    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn velocity(&self) -> Vec2 {
        (self.position - self.previous_position) / self.step
    }

    /// Reconstructs `previous_position` so the derived velocity equals `v`.
    fn set_velocity(&mut self, velocity: Vec2) {
        self.previous_position = self.position - velocity * self.step;
    }

    fn integrate(&mut self) {
        let next = 2.0 * self.position - self.previous_position
            + self.acceleration * (self.step * self.step);
        self.previous_position = self.position;
        self.position = next;
    }
}

impl Collide for VerletBall {
    /// Position-only pairwise resolution: push the pair apart along the
    /// contact normal split by radius ratio, and let the position history
    /// absorb the velocity change. No impulse.
    fn resolve_pair(a: &mut Self, b: &mut Self) {
        let delta = b.position - a.position;
        let min_dist = a.radius + b.radius;
        let dist2 = delta.length_squared();
        if dist2 >= min_dist * min_dist {
            return;
        }

        let dist = dist2.sqrt();
        // Coincident centers leave no contact normal to work with
        let normal = if dist > EPSILON { delta / dist } else { Vec2::X };
        let overlap = min_dist - dist;

        let mass_ratio_a = a.radius / min_dist;
        let mass_ratio_b = b.radius / min_dist;

        let correction = normal * overlap;
        a.position -= correction * mass_ratio_b;
        b.position += correction * mass_ratio_a;
    }
}
