//! Shared entity components

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position and orientation (degrees)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f32,
}

impl Transform {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
        }
    }
}

/// Constant motion set at spawn/fire time (no acceleration model)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    pub velocity: Vec2,
    /// Spin (deg/s)
    pub rotation_speed: f32,
}

impl Physics {
    /// Integrate `transform` forward by `dt`
    #[inline]
    pub fn integrate(&self, transform: &mut Transform, dt: f32) {
        transform.position += self.velocity * dt;
        transform.rotation += self.rotation_speed * dt;
    }
}

/// Display surface extent; y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Whether `pos` lies within the rectangle grown by `margin` on every side
    #[inline]
    pub fn contains(&self, pos: Vec2, margin: f32) -> bool {
        pos.x >= -margin
            && pos.x <= self.width + margin
            && pos.y >= -margin
            && pos.y <= self.height + margin
    }
}
