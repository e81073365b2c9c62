//! Point light and floor-plane shadow projection.

use nalgebra::{Matrix4, Point3};
use serde::{Deserialize, Serialize};

/// The scene's point light and the color its shadow is blended with.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Point3<f32>,
    /// Premultiplied RGBA the shadow pass draws with.
    pub shadow_color: [f32; 4],
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Point3::new(-14.0, 12.0, -3.0),
            shadow_color: [0.25, 0.25, 0.25, 0.65],
        }
    }
}

/// Planar projection onto the floor plane `y = 0` from the light position.
///
/// A homogeneous point `p` maps to the intersection of the ray
/// `light -> p` with the floor; applying this to the ball transform and
/// redrawing the sphere mesh produces its drop shadow. Undefined when the
/// light sits on the floor plane (`light.y == 0`).
pub fn shadow_matrix(light: &Light) -> Matrix4<f32> {
    let (lx, ly, lz) = (light.position.x, light.position.y, light.position.z);
    Matrix4::new(
        ly, -lx, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.0, //
        0.0, -lz, ly, 0.0, //
        0.0, -1.0, 0.0, ly,
    )
}
