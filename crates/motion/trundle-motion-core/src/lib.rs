//! Trundle Motion Core (engine-agnostic)
//!
//! Rolling-without-slipping pose composition along a cyclic waypoint path.
//! The animator owns its progress state explicitly (segment index, folded
//! rotation); hosts thread one instance through their frame loop and apply
//! the returned 4x4 transform to the sphere mesh before rasterization.

pub mod animator;
pub mod error;
pub mod path;

// Re-exports for consumers (adapters)
pub use animator::{roll_rotation, RollAnimator};
pub use error::PathError;
pub use path::{Path, Waypoint};
