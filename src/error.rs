//! Construction-time validation errors
//!
//! The kernel itself is infallible once built: integrators and resolvers never
//! return errors. Everything that could poison the simulation with NaNs is
//! rejected here, when bodies, walls, and configs are constructed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("ball radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("time step must be positive and finite, got {0}")]
    InvalidStep(f32),

    #[error("wall length must be positive and finite, got {0}")]
    InvalidWallLength(f32),

    #[error("wall thickness must be positive and finite, got {0}")]
    InvalidWallThickness(f32),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
