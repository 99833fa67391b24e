//! Ballpit - a 2D ball physics sandbox with swappable integrators
//!
//! Core modules:
//! - `sim`: Deterministic physics kernel (bodies, integrators, collisions)
//! - `config`: Data-driven scene and solver configuration
//! - `error`: Construction-time validation errors
//!
//! Rendering, windowing, and input are external collaborators: the kernel
//! exposes a spawn interface, a [`sim::RenderSink`] presentation pass, and
//! nothing else.

pub mod config;
pub mod error;
pub mod sim;

pub use config::SimConfig;
pub use error::SimError;

use glam::Vec2;

/// Physics constants shared across the kernel
pub mod consts {
    /// Pixels per meter
    pub const SCALE: f32 = 100.0;
    /// Gravitational acceleration in m/s² (screen space, +y down)
    pub const GRAVITY: f32 = 9.81;
    /// Fraction of normal-direction speed retained after a collision
    pub const RESTITUTION: f32 = 0.8;
    /// Tangential damping applied on floor contact
    pub const FRICTION_COEFFICIENT: f32 = 0.5;
    /// Distance tolerance below which a contact normal is degenerate
    pub const EPSILON: f32 = 1e-4;
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Default window bounds
    pub const WINDOW_WIDTH: f32 = 1000.0;
    pub const WINDOW_HEIGHT: f32 = 1000.0;

    /// Body collection cap; the spawner declines past this
    pub const MAX_BALLS: usize = 700;
}

/// Velocity vector for a launch at `speed` (m/s) and `angle` (radians),
/// scaled to pixel space.
#[inline]
pub fn launch_velocity(speed: f32, angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin()) * speed * consts::SCALE
}

/// Constant downward gravitational acceleration in pixel space.
#[inline]
pub fn gravity() -> Vec2 {
    Vec2::new(0.0, consts::GRAVITY * consts::SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_velocity_axes() {
        let v = launch_velocity(10.0, 0.0);
        assert!((v.x - 1000.0).abs() < 0.001);
        assert!(v.y.abs() < 0.001);

        let v = launch_velocity(2.0, std::f32::consts::FRAC_PI_2);
        assert!(v.x.abs() < 0.001);
        assert!((v.y - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_gravity_points_down_in_screen_space() {
        let g = gravity();
        assert_eq!(g.x, 0.0);
        assert!((g.y - 981.0).abs() < 0.001);
    }
}
