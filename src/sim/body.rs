//! The body capability shared by all integration schemes
//!
//! Velocity is a capability method, not a stored attribute: resolver code
//! written against `velocity`/`set_velocity` works uniformly whether the
//! concrete type stores a velocity field ([`super::EulerBall`],
//! [`super::Rk4Ball`]) or derives it from a position history
//! ([`super::VerletBall`]).

use glam::Vec2;

use crate::error::SimError;
use crate::sim::collision::Bounds;

/// Parameters for constructing a new body, as produced by the drag launcher
/// or the timed auto-spawner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParams {
    /// Ball radius in pixels, must be positive
    pub radius: f32,
    /// Initial center position in pixels
    pub position: Vec2,
    /// Initial speed in m/s
    pub speed: f32,
    /// Launch angle in radians
    pub angle: f32,
}

/// A circular rigid body advanced by a fixed-step integrator.
///
/// The accessor contract: after any `integrate` or collision-resolution call,
/// `position()` and `velocity()` reflect the variant's internal representation
/// with no stale copies. `set_position` moves the body without disturbing its
/// velocity; `set_velocity` rewrites whatever representation the scheme uses
/// to carry velocity.
pub trait Body {
    /// Construct a body from launch parameters. `bounds` is only consumed by
    /// schemes that fuse border handling into their update step.
    fn from_launch(params: &LaunchParams, bounds: Bounds) -> Result<Self, SimError>
    where
        Self: Sized;

    fn radius(&self) -> f32;

    /// Fixed integration timestep in seconds
    fn step(&self) -> f32;

    /// Change the timestep. Preserves the current velocity for schemes that
    /// derive it from the position history.
    fn set_step(&mut self, step: f32) -> Result<(), SimError>;

    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);

    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);

    /// Advance one fixed timestep under the body's constant acceleration.
    fn integrate(&mut self);

    fn speed(&self) -> f32 {
        self.velocity().length()
    }
}

/// Shared construction-time invariants.
pub(crate) fn validate_radius(radius: f32) -> Result<(), SimError> {
    if radius > 0.0 && radius.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidRadius(radius))
    }
}

pub(crate) fn validate_step(step: f32) -> Result<(), SimError> {
    if step > 0.0 && step.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidStep(step))
    }
}
