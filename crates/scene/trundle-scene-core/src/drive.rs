//! Frame-loop glue: advancing the roll animation.
//!
//! The host's idle/frame callback owns one [`BallDrive`] and ticks it once
//! per frame; the accumulated angle feeds the animator and the resulting
//! transform goes straight into [`plan_frame`](crate::frame::plan_frame).

use nalgebra::Matrix4;

use trundle_motion_core::RollAnimator;

/// Angle added per frame while the ball is rolling.
pub const FRAME_ROLL_STEP: f32 = 0.001;

/// Accumulates the roll angle across frames and maps it to ball poses.
#[derive(Clone, Debug)]
pub struct BallDrive {
    animator: RollAnimator,
    angle: f32,
    speed: f32,
}

impl BallDrive {
    pub fn new(animator: RollAnimator) -> Self {
        Self {
            animator,
            angle: 0.0,
            speed: FRAME_ROLL_STEP,
        }
    }

    /// Use a custom per-frame angle step.
    pub fn with_speed(animator: RollAnimator, speed: f32) -> Self {
        Self {
            speed,
            ..Self::new(animator)
        }
    }

    /// Total angle rolled so far.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Advance one frame and return the ball transform. While `rolling` is
    /// off the angle holds and the pose is unchanged.
    pub fn tick(&mut self, rolling: bool) -> Matrix4<f32> {
        if rolling {
            self.angle += self.speed;
        }
        self.animator.pose(self.angle)
    }
}
