//! Render options.
//!
//! One explicit value passed into the frame planner each frame instead of
//! process-wide toggles, so a host can snapshot, persist, or test them.

use serde::{Deserialize, Serialize};

/// Polygon fill mode for a mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    Solid,
    Wireframe,
}

impl FillMode {
    /// The other mode, for toggle commands.
    #[inline]
    pub fn toggled(self) -> FillMode {
        match self {
            FillMode::Solid => FillMode::Wireframe,
            FillMode::Wireframe => FillMode::Solid,
        }
    }
}

/// Shading model selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    Smooth,
    Flat,
}

/// Per-frame render switches for the rolling-sphere scene.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub sphere_fill: FillMode,
    pub floor_fill: FillMode,
    pub shadow: bool,
    pub lighting: bool,
    pub shading: Shading,
    pub fog: bool,
    pub texture: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sphere_fill: FillMode::Solid,
            floor_fill: FillMode::Solid,
            shadow: true,
            lighting: true,
            shading: Shading::Smooth,
            fog: false,
            texture: false,
        }
    }
}
