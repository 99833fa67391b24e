//! Static wall geometry
//!
//! A wall is a finite line segment with thickness, described by a start
//! point, a length, and an incline. Collision code only needs its endpoints,
//! unit normal, and the closest point on the segment to a ball center.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use crate::config::WallConfig;
use crate::error::SimError;

/// Velocity damping applied on wall contact
pub const WALL_FRICTION: f32 = 0.98;

/// An immutable inclined obstacle.
#[derive(Debug, Clone)]
pub struct Wall {
    start: Vec2,
    length: f32,
    thickness: f32,
    /// Incline in radians
    incline: f32,
    unit_normal: Vec2,
}

impl Wall {
    pub fn new(start: Vec2, length: f32, thickness: f32, incline: f32) -> Result<Self, SimError> {
        if !(length > 0.0 && length.is_finite()) {
            return Err(SimError::InvalidWallLength(length));
        }
        if !(thickness > 0.0 && thickness.is_finite()) {
            return Err(SimError::InvalidWallThickness(thickness));
        }
        Ok(Self {
            start,
            length,
            thickness,
            incline,
            unit_normal: Vec2::new((incline + FRAC_PI_2).cos(), (incline + FRAC_PI_2).sin()),
        })
    }

    pub fn from_config(config: &WallConfig) -> Result<Self, SimError> {
        Self::new(config.start, config.length, config.thickness, config.incline)
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.start + self.length * Vec2::new(self.incline.cos(), self.incline.sin())
    }

    #[inline]
    pub fn unit_normal(&self) -> Vec2 {
        self.unit_normal
    }

    #[inline]
    pub fn incline(&self) -> f32 {
        self.incline
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    #[inline]
    pub fn friction(&self) -> f32 {
        WALL_FRICTION
    }

    /// Closest point on the wall's segment to `point`. The perpendicular foot
    /// is clamped to the endpoints when it falls outside the segment.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let start = self.start;
        let end = self.end();
        let direction = (end - start) / self.length;

        let to_start = start - point;
        if direction.dot(to_start) > 0.0 {
            return start;
        }

        let end_to_point = point - end;
        if direction.dot(end_to_point) > 0.0 {
            return end;
        }

        // Perpendicular foot within the segment
        start - direction * direction.dot(to_start)
    }
}
