//! Error types for the motion core.

use serde::{Deserialize, Serialize};

/// Configuration errors for paths and animators.
///
/// All variants are construction-time failures; once a path or animator
/// exists, pose evaluation cannot fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PathError {
    /// A path needs at least two waypoints to form a segment.
    #[error("path needs at least 2 waypoints, got {count}")]
    TooFewWaypoints { count: usize },

    /// Two consecutive waypoints coincide; the segment has no direction and
    /// roll progress along it would divide by zero.
    #[error("degenerate segment leaving waypoint {index}: consecutive waypoints coincide")]
    DegenerateSegment { index: usize },

    /// The ball radius must be finite and strictly positive.
    #[error("ball radius must be positive, got {radius}")]
    NonPositiveRadius { radius: f32 },
}
