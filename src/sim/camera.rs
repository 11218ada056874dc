//! Scrolling camera constrained to the map

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bounds::MapInfo;
use super::input::KeyState;
use crate::consts::CAMERA_STEP;
use crate::smerp;

/// Allowed range for the camera center (left, right, bottom, top)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl CameraBounds {
    /// Keep half a window between the camera center and the map edges
    pub fn for_map(map: &MapInfo, window: Vec2) -> Self {
        let half = window / 2.0;
        Self {
            left: half.x,
            right: map.end_of_map() - half.x,
            bottom: half.y,
            top: map.height_px() - half.y,
        }
    }

    /// Clamp a camera center into range. An inverted range (map smaller
    /// than the window) pins that axis to its lower edge.
    pub fn constrain(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(p.x, self.left, self.right),
            clamp_axis(p.y, self.bottom, self.top),
        )
    }
}

fn clamp_axis(v: f32, lo: f32, hi: f32) -> f32 {
    if hi < lo { lo } else { v.clamp(lo, hi) }
}

/// Camera center and the point it is easing toward
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec2,
    pub target: Vec2,
    pub bounds: CameraBounds,
    pub window: Vec2,
}

impl Camera {
    pub fn new(bounds: CameraBounds, window: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            target: Vec2::new(window.x / 2.0, window.y * 2.0),
            bounds,
            window,
        }
    }

    /// Retarget from held direction keys. Vertical input overrides
    /// horizontal for the frame.
    pub fn steer(&mut self, keys: &KeyState) {
        let p = self.position;
        if keys.left {
            self.target = Vec2::new(p.x - CAMERA_STEP, p.y);
        } else if keys.right {
            self.target = Vec2::new(p.x + CAMERA_STEP, p.y);
        }
        if keys.up {
            self.target = Vec2::new(p.x, p.y + CAMERA_STEP);
        } else if keys.down {
            self.target = Vec2::new(p.x, p.y - CAMERA_STEP);
        }
    }

    /// Ease toward the target, then clamp to the map
    pub fn pan(&mut self, dt: f32, fraction: f32) {
        self.position = smerp(self.position, self.target, dt, fraction);
        self.position = self.bounds.constrain(self.position);
    }

    /// Convert a window-space point into world space
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.position - self.window / 2.0
    }
}
