//! Trundle Raster Core (engine-agnostic)
//!
//! Integer midpoint circle rasterization plus the small data model around it:
//! validated [`Circle`] values, the count-prefixed circle-list text format,
//! and the view-extent math used to frame a set of circles in a window.
//! Hosts hand the produced point offsets to whatever surface they draw on;
//! no rendering happens here.

pub mod circle;
pub mod error;
pub mod input;
pub mod midpoint;
pub mod view;

// Re-exports for consumers (adapters)
pub use circle::Circle;
pub use error::RasterError;
pub use input::parse_circle_list;
pub use midpoint::{distinct_offsets, rasterize, MidpointCircle};
pub use view::{view_extents, Extents};
