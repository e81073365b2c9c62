//! Rolling-without-slipping pose composition.
//!
//! The input angle is the total distance rolled divided by the ball radius,
//! so one segment is consumed every `segment_length / radius` of angle.
//! Rotation about the horizontal axis perpendicular to the travel direction
//! accumulates as segments complete; within a segment only the partial
//! rotation since the last completed segment is applied on top.

use nalgebra::{Matrix4, Rotation3, Translation3, Unit, Vector3};

use crate::error::PathError;
use crate::path::Path;

/// Rotation for rolling along `segment` by `travel` radians.
///
/// The axis is `up x segment` (up = +Y, the floor normal): horizontal and
/// perpendicular to the direction of travel. A segment parallel to the
/// floor normal has no rolling axis and yields the identity.
pub fn roll_rotation(segment: Vector3<f32>, travel: f32) -> Matrix4<f32> {
    let axis = Vector3::y().cross(&segment);
    match Unit::try_new(axis, 1.0e-6) {
        Some(axis) => Rotation3::from_axis_angle(&axis, travel).to_homogeneous(),
        None => Matrix4::identity(),
    }
}

/// Keyframe-driven rolling-ball animator.
///
/// Owns its progress state explicitly: the current segment index, the angle
/// at which that segment started, and the rotation folded in by completed
/// segments. State only moves forward; callers pass a non-decreasing angle
/// and repeated calls with an equal angle return the same transform.
#[derive(Clone, Debug)]
pub struct RollAnimator {
    path: Path,
    radius: f32,
    step: usize,
    last_angle: f32,
    accumulated: Matrix4<f32>,
}

impl RollAnimator {
    /// Animator for a unit-radius ball.
    pub fn new(path: Path) -> Self {
        Self {
            path,
            radius: 1.0,
            step: 0,
            last_angle: 0.0,
            accumulated: Matrix4::identity(),
        }
    }

    /// Animator for a ball of the given radius.
    pub fn with_radius(path: Path, radius: f32) -> Result<Self, PathError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PathError::NonPositiveRadius { radius });
        }
        let mut animator = Self::new(path);
        animator.radius = radius;
        Ok(animator)
    }

    /// Index of the segment currently being traversed. Grows without
    /// wrapping; the path is indexed modulo its length.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Angle at which the current segment started.
    #[inline]
    pub fn last_angle(&self) -> f32 {
        self.last_angle
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rigid transform of the ball after rolling a total of `angle`
    /// radians of circumference since the start of the animation.
    ///
    /// `angle` must not decrease across calls on the same animator; state
    /// advances only when a segment completes, so repeating an angle is
    /// idempotent. An angle jump spanning several segments folds each
    /// completed segment before the final partial pose, equivalent to the
    /// same total applied in small increments.
    pub fn pose(&mut self, angle: f32) -> Matrix4<f32> {
        loop {
            let start = self.path.waypoint(self.step).to_vector();
            let segment = self.path.segment(self.step);
            let length = segment.norm();
            let angle_delta = angle - self.last_angle;
            let progress = angle_delta * self.radius / length;
            if progress > 1.0 {
                // Rolled past this segment: fold its full rotation and
                // retry against the next one.
                self.accumulated =
                    roll_rotation(segment, length / self.radius) * self.accumulated;
                self.last_angle += length / self.radius;
                self.step += 1;
                continue;
            }
            let position = start + segment * progress;
            let current = roll_rotation(segment, angle_delta);
            return Translation3::from(position).to_homogeneous() * current * self.accumulated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Waypoint;

    fn unit_x_square() -> Path {
        Path::new(vec![
            Waypoint::new(0.0, 1.0, 0.0),
            Waypoint::new(4.0, 1.0, 0.0),
            Waypoint::new(4.0, 1.0, 4.0),
            Waypoint::new(0.0, 1.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_bad_radius() {
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = RollAnimator::with_radius(unit_x_square(), radius);
            assert!(matches!(result, Err(PathError::NonPositiveRadius { .. })));
        }
    }

    #[test]
    fn quarter_roll_moves_the_top_forward() {
        // Rolling along +X: the top of the ball tips in the direction of
        // travel.
        let m = roll_rotation(Vector3::new(1.0, 0.0, 0.0), std::f32::consts::FRAC_PI_2);
        let top = m.transform_vector(&Vector3::new(0.0, 1.0, 0.0));
        assert!((top - Vector3::new(1.0, 0.0, 0.0)).norm() < 1.0e-5);
    }

    #[test]
    fn vertical_segment_has_no_roll_axis() {
        let m = roll_rotation(Vector3::new(0.0, 3.0, 0.0), 1.0);
        assert_eq!(m, Matrix4::identity());
    }
}
