//! View extents for framing a circle list.

use serde::{Deserialize, Serialize};

use crate::circle::Circle;

/// Half-extents of a view volume, in pixels from the origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extents {
    pub half_width: i32,
    pub half_height: i32,
}

/// Smallest half-extents containing every circle, floored at half the
/// window size, then widened on one axis so the extent aspect matches the
/// window aspect (a circle list framed this way never renders distorted).
///
/// `window` is the `(width, height)` of the target window; both must be
/// non-zero.
pub fn view_extents(circles: &[Circle], window: (u32, u32)) -> Extents {
    let (win_w, win_h) = window;
    let mut half_w = (win_w / 2) as i32;
    let mut half_h = (win_h / 2) as i32;
    for c in circles {
        let (x, y) = c.center;
        half_w = half_w.max(x.abs() + c.radius);
        half_h = half_h.max(y.abs() + c.radius);
    }

    if half_w as f32 / half_h as f32 > win_w as f32 / win_h as f32 {
        half_h = (win_h as f32 / win_w as f32 * half_w as f32) as i32;
    } else {
        half_w = (win_w as f32 / win_h as f32 * half_h as f32) as i32;
    }
    Extents {
        half_width: half_w,
        half_height: half_h,
    }
}
