//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D transform in the simulation plane: position, a single rotation
/// around the view axis, and a non-uniform scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2 {
    pub position: Vec2,
    /// Rotation in degrees, counter-clockwise from the +X axis convention.
    pub rotation_deg: f32,
    /// Non-uniform scale. `scale.x * scale.y` is the instance's area.
    pub scale: Vec2,
}

impl Default for Transform2 {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation_deg: 0.0,
            scale: Vec2::ONE,
        }
    }
}

impl Transform2 {
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// The transform's up direction: the +Y axis rotated by `rotation_deg`.
    pub fn up(&self) -> Vec2 {
        let rad = self.rotation_deg.to_radians();
        Vec2::new(-rad.sin(), rad.cos())
    }

    /// The transform's down direction. Symbiote tips and projectile travel
    /// both point this way.
    pub fn down(&self) -> Vec2 {
        -self.up()
    }

    /// Map a local offset into world space: scale, rotate, translate.
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        let rad = self.rotation_deg.to_radians();
        self.position + Vec2::from_angle(rad).rotate(self.scale * local)
    }
}

/// An RGBA color applied to renderable surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current logic tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one logic tick of duration `dt`.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}
