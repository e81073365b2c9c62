//! Camera state.

use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// World axes the eye can be nudged along.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Viewer position, always looking at the origin with +Y up.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Point3<f32>,
}

impl Camera {
    const DEFAULT_EYE: (f32, f32, f32) = (7.0, 3.0, -10.0);

    /// Move the eye along a world axis.
    pub fn nudge(&mut self, axis: Axis, delta: f32) {
        match axis {
            Axis::X => self.eye.x += delta,
            Axis::Y => self.eye.y += delta,
            Axis::Z => self.eye.z += delta,
        }
    }

    /// Put the eye back at the initial viewer position.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Right-handed look-at view matrix toward the origin.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.eye, &Point3::origin(), &Vector3::y())
    }
}

impl Default for Camera {
    fn default() -> Self {
        let (x, y, z) = Self::DEFAULT_EYE;
        Self {
            eye: Point3::new(x, y, z),
        }
    }
}
