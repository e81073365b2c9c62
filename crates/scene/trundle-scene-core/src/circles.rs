//! The 2D circle scene.
//!
//! The circle drawer has three display modes, selected by the UI layer:
//! a single hand-entered circle, the loaded list, or the loaded list with
//! radii animated by the frame phase.

use serde::{Deserialize, Serialize};

use trundle_raster_core::Circle;

/// What the circle scene draws this frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CircleMode {
    /// One circle entered by hand.
    Manual(Circle),
    /// Every circle from the loaded list.
    List,
    /// Every circle from the list, radius scaled by the frame phase
    /// in `[0, 1)`.
    Pulse { phase: f32 },
}

/// Rasterize one frame of the circle scene into per-circle point batches
/// (absolute pixel coordinates).
pub fn circle_frame(circles: &[Circle], mode: &CircleMode) -> Vec<Vec<(i32, i32)>> {
    match mode {
        CircleMode::Manual(circle) => vec![circle.points().collect()],
        CircleMode::List => circles.iter().map(|c| c.points().collect()).collect(),
        CircleMode::Pulse { phase } => circles
            .iter()
            .map(|c| c.pulsed(*phase).points().collect())
            .collect(),
    }
}
