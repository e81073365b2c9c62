//! Cyclic waypoint paths.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// One 3D waypoint of a rolling path.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Waypoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The waypoint as a nalgebra vector.
    #[inline]
    pub fn to_vector(self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<(f32, f32, f32)> for Waypoint {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

/// A fixed, cyclic polyline of waypoints. The segment after the last
/// waypoint wraps back to the first.
///
/// Invariants, checked once at construction (deserializing re-validates):
/// - at least two waypoints;
/// - every cyclic segment, including last -> first, has positive length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Waypoint>", into = "Vec<Waypoint>")]
pub struct Path {
    waypoints: Vec<Waypoint>,
}

impl Path {
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::TooFewWaypoints {
                count: waypoints.len(),
            });
        }
        for (i, w) in waypoints.iter().enumerate() {
            let next = waypoints[(i + 1) % waypoints.len()];
            let segment = next.to_vector() - w.to_vector();
            if !(segment.norm() > 0.0) {
                return Err(PathError::DegenerateSegment { index: i });
            }
        }
        Ok(Self { waypoints })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoint at `index` modulo the path length.
    #[inline]
    pub fn waypoint(&self, index: usize) -> Waypoint {
        self.waypoints[index % self.waypoints.len()]
    }

    /// The directed segment leaving the waypoint at `index` (cyclic).
    pub fn segment(&self, index: usize) -> Vector3<f32> {
        self.waypoint(index + 1).to_vector() - self.waypoint(index).to_vector()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }
}

impl TryFrom<Vec<Waypoint>> for Path {
    type Error = PathError;

    fn try_from(waypoints: Vec<Waypoint>) -> Result<Self, PathError> {
        Path::new(waypoints)
    }
}

impl From<Path> for Vec<Waypoint> {
    fn from(path: Path) -> Self {
        path.waypoints
    }
}
