//! Validated circle values.

use serde::{Deserialize, Serialize};

use crate::error::RasterError;
use crate::midpoint::{rasterize, MidpointCircle};

/// A circle on the integer pixel grid.
///
/// `radius >= 0` holds by construction; circles are never mutated after
/// creation and are consumed once per rendered frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Circle {
    pub center: (i32, i32),
    pub radius: i32,
}

impl Circle {
    /// Build a circle, rejecting a negative radius.
    pub fn new(center: (i32, i32), radius: i32) -> Result<Self, RasterError> {
        if radius < 0 {
            return Err(RasterError::NegativeRadius { radius });
        }
        Ok(Self { center, radius })
    }

    /// Boundary offsets relative to the center.
    ///
    /// See [`rasterize`] for the duplicate-emission behavior at the octant
    /// seams.
    #[inline]
    pub fn offsets(&self) -> MidpointCircle {
        rasterize(self.radius)
    }

    /// Boundary points in absolute pixel coordinates.
    pub fn points(&self) -> impl Iterator<Item = (i32, i32)> {
        let (cx, cy) = self.center;
        self.offsets().map(move |(dx, dy)| (cx + dx, cy + dy))
    }

    /// The same circle drawn at a fraction of its radius, for the pulse
    /// animation. `phase` is the frame phase, clamped to `[0, 1]`; the
    /// scaled radius truncates toward zero.
    pub fn pulsed(&self, phase: f32) -> Circle {
        let phase = phase.clamp(0.0, 1.0);
        Circle {
            center: self.center,
            radius: (phase * self.radius as f32) as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_radius() {
        assert_eq!(
            Circle::new((0, 0), -3),
            Err(RasterError::NegativeRadius { radius: -3 })
        );
    }

    #[test]
    fn pulse_truncates() {
        let c = Circle::new((2, -1), 10).unwrap();
        assert_eq!(c.pulsed(0.55).radius, 5);
        assert_eq!(c.pulsed(0.0).radius, 0);
        // Out-of-range phases clamp rather than produce a negative radius.
        assert_eq!(c.pulsed(-1.0).radius, 0);
        assert_eq!(c.pulsed(2.0).radius, 10);
        assert_eq!(c.pulsed(0.55).center, (2, -1));
    }
}
