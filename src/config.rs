//! Scene and solver configuration
//!
//! Everything the demo binary (or an embedding application) needs to set up a
//! run lives here as plain serde data. The default configuration reproduces
//! the classic two-ramp scene.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Collision solver tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Relaxation passes per tick. 1 is the reference behavior; higher values
    /// trade performance for better simultaneous multi-contact resolution.
    pub iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { iterations: 1 }
    }
}

/// Timed auto-spawner settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnerConfig {
    /// Where new balls appear
    pub position: Vec2,
    /// Launch speed in m/s
    pub speed: f32,
    /// Launch angle in radians
    pub angle: f32,
    /// Simulation-time delay between spawns, in seconds
    pub delay: f32,
    /// Random radius range, in pixels
    pub min_radius: f32,
    pub max_radius: f32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            position: Vec2::new(40.0, 150.0),
            speed: 10.0,
            angle: 0.0,
            delay: 0.025,
            min_radius: 2.0,
            max_radius: 20.0,
        }
    }
}

/// A static wall, as configuration data. Converted into a validated
/// [`crate::sim::Wall`] when the simulation is built.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WallConfig {
    pub start: Vec2,
    pub length: f32,
    pub thickness: f32,
    /// Incline in radians
    pub incline: f32,
}

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Window bounds in pixels
    pub width: f32,
    pub height: f32,
    /// Fixed timestep applied to spawned bodies
    pub step: f32,
    /// Body collection cap
    pub max_balls: usize,
    /// Seed for the spawner RNG
    pub seed: u64,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub spawner: Option<SpawnerConfig>,
    #[serde(default)]
    pub walls: Vec<WallConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            step: SIM_DT,
            max_balls: MAX_BALLS,
            seed: 0,
            solver: SolverConfig::default(),
            spawner: Some(SpawnerConfig::default()),
            walls: vec![
                WallConfig {
                    start: Vec2::new(500.0, 350.0),
                    length: 300.0,
                    thickness: 5.0,
                    incline: -45.0_f32.to_radians(),
                },
                WallConfig {
                    start: Vec2::new(275.0, 400.0),
                    length: 300.0,
                    thickness: 5.0,
                    incline: 30.0_f32.to_radians(),
                },
            ],
        }
    }
}

impl SimConfig {
    /// Reject configurations that would poison the kernel.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.width > 0.0 && self.width.is_finite())
            || !(self.height > 0.0 && self.height.is_finite())
        {
            return Err(SimError::InvalidConfig(format!(
                "bounds must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.step > 0.0 && self.step.is_finite()) {
            return Err(SimError::InvalidStep(self.step));
        }
        if self.solver.iterations == 0 {
            return Err(SimError::InvalidConfig(
                "solver.iterations must be at least 1".into(),
            ));
        }
        if let Some(spawner) = &self.spawner {
            if !(spawner.min_radius > 0.0 && spawner.max_radius >= spawner.min_radius) {
                return Err(SimError::InvalidConfig(format!(
                    "spawner radius range [{}, {}] is empty or non-positive",
                    spawner.min_radius, spawner.max_radius
                )));
            }
            if !(spawner.delay > 0.0) {
                return Err(SimError::InvalidConfig(format!(
                    "spawner delay must be positive, got {}",
                    spawner.delay
                )));
            }
        }
        Ok(())
    }
}
