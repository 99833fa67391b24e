//! Deterministic physics kernel
//!
//! Everything in this module must stay pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (ascending body index)
//! - No rendering or platform dependencies
//!
//! Four integration schemes share one [`Body`] accessor contract; the
//! [`Collide`] resolver is written against that contract and specialized only
//! where a scheme's response genuinely differs.

pub mod body;
pub mod clamped;
pub mod collision;
pub mod euler;
pub mod launch;
pub mod rk4;
pub mod tick;
pub mod verlet;
pub mod wall;

pub use body::{Body, LaunchParams};
pub use clamped::ClampedEulerBall;
pub use collision::{Bounds, Collide};
pub use euler::EulerBall;
pub use launch::{DRAG_BALL_RADIUS, DRAG_SPEED_DIVISOR, DragLaunch};
pub use rk4::Rk4Ball;
pub use tick::{RenderSink, Simulation};
pub use verlet::VerletBall;
pub use wall::{WALL_FRICTION, Wall};
