//! Collision detection and response
//!
//! Three operations, run in driver order: window-border containment, pairwise
//! overlap resolution, body-wall resolution. The default implementations are
//! written against the [`Body`] accessor contract so they work for stored and
//! derived velocity alike; a scheme overrides an operation only where its
//! response genuinely differs (position-only Verlet pairs).
//!
//! One sign convention throughout: the contact normal points from A to B,
//! relative velocity is `vB - vA`, and the pair is approaching when their dot
//! product is negative.

use glam::Vec2;

use crate::consts::{EPSILON, FRICTION_COEFFICIENT, RESTITUTION};
use crate::sim::body::Body;
use crate::sim::wall::Wall;

/// Window bounds the border containment clamps into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Per-scheme collision resolution over the [`Body`] capability.
pub trait Collide: Body + Sized {
    /// Clamp the body into `[r, W-r] x [r, H-r]`. A clamped axis has its
    /// velocity component flipped and scaled by the restitution; a floor clamp
    /// additionally damps the tangential component to model ground drag.
    fn resolve_border(&mut self, bounds: Bounds) {
        let r = self.radius();
        let mut position = self.position();
        let mut velocity = self.velocity();
        let mut clamped = false;

        if position.x + r > bounds.width {
            position.x = bounds.width - r;
            velocity.x *= -RESTITUTION;
            clamped = true;
        } else if position.x - r < 0.0 {
            position.x = r;
            velocity.x *= -RESTITUTION;
            clamped = true;
        }

        if position.y + r > bounds.height {
            position.y = bounds.height - r;
            velocity.y *= -RESTITUTION;
            velocity.x *= FRICTION_COEFFICIENT;
            clamped = true;
        } else if position.y - r < 0.0 {
            position.y = r;
            velocity.y *= -RESTITUTION;
            clamped = true;
        }

        if clamped {
            self.set_position(position);
            self.set_velocity(velocity);
        }
    }

    /// Separate an overlapping pair and exchange a restitution impulse along
    /// the contact normal. Positional correction and impulse are split by
    /// radius ratio, radius standing in for mass: the larger body moves less.
    fn resolve_pair(a: &mut Self, b: &mut Self) {
        let delta = b.position() - a.position();
        let min_dist = a.radius() + b.radius();
        let dist2 = delta.length_squared();
        if dist2 >= min_dist * min_dist {
            return;
        }

        let dist = dist2.sqrt();
        // Coincident centers leave no contact normal to work with
        let normal = if dist > EPSILON { delta / dist } else { Vec2::X };
        let overlap = min_dist - dist;

        let mass_ratio_a = a.radius() / min_dist;
        let mass_ratio_b = b.radius() / min_dist;

        let correction = normal * overlap;
        a.set_position(a.position() - correction * mass_ratio_b);
        b.set_position(b.position() + correction * mass_ratio_a);

        let relative = b.velocity() - a.velocity();
        let along_normal = relative.dot(normal);

        // Impulse only when approaching
        if along_normal < 0.0 {
            let impulse = normal * (-(1.0 + RESTITUTION) * along_normal);
            a.set_velocity(a.velocity() - impulse * mass_ratio_b);
            b.set_velocity(b.velocity() + impulse * mass_ratio_a);
        }
    }

    /// Push the body out of a wall along the normal from the closest segment
    /// point, reflect the velocity with restitution, and damp the result by
    /// the wall's friction.
    fn resolve_wall(&mut self, wall: &Wall) {
        let position = self.position();
        let closest = wall.closest_point(position);
        let to_closest = closest - position;
        let dist = to_closest.length();
        if dist >= self.radius() {
            return;
        }

        // Ball center on the segment gives no usable direction; fall back to
        // the wall's own normal
        let normal = if dist > EPSILON {
            to_closest / dist
        } else {
            wall.unit_normal()
        };
        let overlap = self.radius() - dist;

        // Capture the velocity before the positional correction so derived
        // velocities reflect the motion, not the push-out
        let velocity = self.velocity();
        self.set_position(position - normal * overlap);

        let along_normal = velocity.dot(normal);
        let reflected = velocity - (1.0 + RESTITUTION) * along_normal * normal;
        self.set_velocity(reflected * wall.friction());
    }
}
