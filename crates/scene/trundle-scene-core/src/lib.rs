//! Trundle Scene Core
//!
//! The rolling-sphere scene as data: render options, camera and light
//! values, a command enum for everything the UI layer can toggle, and a
//! stateless frame planner that turns the current state plus the ball pose
//! into a declarative draw list. Hosts own the windowing/input/GPU side and
//! feed commands in; nothing here touches a graphics API.

pub mod camera;
pub mod circles;
pub mod drive;
pub mod frame;
pub mod lighting;
pub mod options;
pub mod state;

// Re-exports for consumers (adapters)
pub use camera::{Axis, Camera};
pub use circles::{circle_frame, CircleMode};
pub use drive::{BallDrive, FRAME_ROLL_STEP};
pub use frame::{plan_frame, DrawCall, FramePlan, Mesh};
pub use lighting::{shadow_matrix, Light};
pub use options::{FillMode, RenderOptions, Shading};
pub use state::{SceneCommand, SceneState};
