//! Drag-to-launch gesture
//!
//! The caller owns a [`DragLaunch`] and feeds it pointer events; a completed
//! press-drag-release cycle yields [`LaunchParams`] aimed from the release
//! point back toward the anchor, with speed proportional to the drag length.
//! No global state: the gesture is an explicit two-state machine.

use glam::Vec2;

use crate::sim::body::LaunchParams;

/// Radius given to drag-launched balls, in pixels
pub const DRAG_BALL_RADIUS: f32 = 20.0;

/// Drag pixels per m/s of launch speed
pub const DRAG_SPEED_DIVISOR: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { anchor: Vec2, pointer: Vec2 },
}

/// Explicit interaction state for the drag-and-shoot gesture.
#[derive(Debug, Clone)]
pub struct DragLaunch {
    state: DragState,
}

impl Default for DragLaunch {
    fn default() -> Self {
        Self::new()
    }
}

impl DragLaunch {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Pointer pressed: anchor the gesture.
    pub fn press(&mut self, position: Vec2) {
        self.state = DragState::Dragging {
            anchor: position,
            pointer: position,
        };
    }

    /// Pointer moved. Ignored while idle.
    pub fn drag(&mut self, position: Vec2) {
        if let DragState::Dragging { pointer, .. } = &mut self.state {
            *pointer = position;
        }
    }

    /// Pointer released: completes the gesture and yields launch parameters,
    /// or `None` if no press preceded the release.
    pub fn release(&mut self, position: Vec2) -> Option<LaunchParams> {
        let DragState::Dragging { anchor, .. } = self.state else {
            return None;
        };
        self.state = DragState::Idle;

        let direction = anchor - position;
        let speed = direction.length() / DRAG_SPEED_DIVISOR;
        let angle = direction.y.atan2(direction.x);

        Some(LaunchParams {
            radius: DRAG_BALL_RADIUS,
            position,
            speed,
            angle,
        })
    }

    /// The anchor-to-pointer segment of an in-progress drag, for an external
    /// renderer to draw as an aiming arrow.
    pub fn aim(&self) -> Option<(Vec2, Vec2)> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { anchor, pointer } => Some((anchor, pointer)),
        }
    }
}
