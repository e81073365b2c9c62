//! Error types for the raster core.

use serde::{Deserialize, Serialize};

/// Errors raised while building or parsing circle data.
///
/// All variants are construction-time precondition failures; once a
/// `Circle` exists, rasterizing it cannot fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RasterError {
    /// A negative radius is a caller contract violation, rejected up front.
    #[error("negative radius: {radius}")]
    NegativeRadius { radius: i32 },
}
