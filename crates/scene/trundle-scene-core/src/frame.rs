//! Frame planning.
//!
//! `plan_frame` is the stateless per-frame function: it reads the scene
//! state, the light, and the ball transform produced by the roll animator,
//! and emits the frame's draw sequence as data. The host walks the calls
//! in order and issues them against its graphics API.

use nalgebra::Matrix4;

use crate::lighting::{shadow_matrix, Light};
use crate::options::{FillMode, RenderOptions};
use crate::state::SceneState;

/// Meshes the scene is built from. The host owns the vertex data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mesh {
    Sphere,
    Floor,
    Axes,
}

/// One draw of a mesh under a model transform.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub mesh: Mesh,
    pub transform: Matrix4<f32>,
    pub fill: FillMode,
    pub depth_write: bool,
    pub color_write: bool,
    /// Drawn blended with the light's shadow color instead of the mesh's
    /// own colors.
    pub shadow: bool,
}

impl DrawCall {
    fn scene(mesh: Mesh, transform: Matrix4<f32>, fill: FillMode) -> Self {
        Self {
            mesh,
            transform,
            fill,
            depth_write: true,
            color_write: true,
            shadow: false,
        }
    }
}

/// A planned frame: the view matrix, the options the shaders need, and the
/// ordered draw list.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    pub view: Matrix4<f32>,
    pub options: RenderOptions,
    pub calls: Vec<DrawCall>,
}

/// Axis lines are drawn at 10x scale so they pierce the whole scene.
const AXIS_SCALE: f32 = 10.0;

/// Build the draw list for one frame.
///
/// Order matters: the sphere; the floor without depth writes (so the
/// shadow can still win the depth test); the projected sphere as the
/// shadow, when enabled; the floor again as a depth-only pass to seal the
/// depth buffer; the axis lines.
pub fn plan_frame(state: &SceneState, light: &Light, ball: &Matrix4<f32>) -> FramePlan {
    let options = state.options;
    let mut calls = Vec::with_capacity(5);

    calls.push(DrawCall::scene(Mesh::Sphere, *ball, options.sphere_fill));

    calls.push(DrawCall {
        depth_write: false,
        ..DrawCall::scene(Mesh::Floor, Matrix4::identity(), options.floor_fill)
    });

    if options.shadow {
        calls.push(DrawCall {
            shadow: true,
            ..DrawCall::scene(Mesh::Sphere, shadow_matrix(light) * ball, options.sphere_fill)
        });
    }

    calls.push(DrawCall {
        color_write: false,
        ..DrawCall::scene(Mesh::Floor, Matrix4::identity(), options.floor_fill)
    });

    calls.push(DrawCall::scene(
        Mesh::Axes,
        Matrix4::new_scaling(AXIS_SCALE),
        FillMode::Solid,
    ));

    FramePlan {
        view: state.camera.view_matrix(),
        options,
        calls,
    }
}
