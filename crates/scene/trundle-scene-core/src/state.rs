//! Scene state and the commands that mutate it.
//!
//! The UI layer translates its keyboard/menu/mouse events into
//! [`SceneCommand`] values and applies them to one owned [`SceneState`];
//! the per-frame draw path only ever reads the state.

use serde::{Deserialize, Serialize};

use crate::camera::{Axis, Camera};
use crate::options::{RenderOptions, Shading};

/// Everything the UI can change between frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SceneCommand {
    /// Solid/wireframe sphere toggle.
    ToggleSphereFill,
    /// Solid/wireframe floor toggle.
    ToggleFloorFill,
    SetShadow(bool),
    SetLighting(bool),
    SetShading(Shading),
    SetFog(bool),
    SetTexture(bool),
    /// Start/stop the rolling animation.
    ToggleRolling,
    /// Move the eye along a world axis.
    NudgeEye { axis: Axis, delta: f32 },
    /// Put the eye back at the initial viewer position.
    ResetEye,
    /// Menu "default view": reset the eye and resume rolling.
    DefaultView,
}

/// Mutable scene state, owned by the host and advanced only through
/// [`SceneState::apply`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneState {
    pub options: RenderOptions,
    pub camera: Camera,
    pub rolling: bool,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneState {
    /// Scene as it appears at startup: default options and eye, rolling.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            camera: Camera::default(),
            rolling: true,
        }
    }

    pub fn apply(&mut self, command: &SceneCommand) {
        match command {
            SceneCommand::ToggleSphereFill => {
                self.options.sphere_fill = self.options.sphere_fill.toggled();
            }
            SceneCommand::ToggleFloorFill => {
                self.options.floor_fill = self.options.floor_fill.toggled();
            }
            SceneCommand::SetShadow(on) => self.options.shadow = *on,
            SceneCommand::SetLighting(on) => self.options.lighting = *on,
            SceneCommand::SetShading(shading) => self.options.shading = *shading,
            SceneCommand::SetFog(on) => self.options.fog = *on,
            SceneCommand::SetTexture(on) => self.options.texture = *on,
            SceneCommand::ToggleRolling => self.rolling = !self.rolling,
            SceneCommand::NudgeEye { axis, delta } => self.camera.nudge(*axis, *delta),
            SceneCommand::ResetEye => self.camera.reset(),
            SceneCommand::DefaultView => {
                self.camera.reset();
                self.rolling = true;
            }
        }
    }
}
