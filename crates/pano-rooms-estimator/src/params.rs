use serde::{Deserialize, Serialize};

/// Height configuration for depth estimation, in meters.
///
/// Passed explicitly at call time; there is no process-wide default
/// state. `ceiling_height ≤ camera_height` is deliberately not guarded:
/// the ceiling-side depth then comes out negative or nonsensical, which
/// matches the documented permissive behavior.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomParams {
    /// Camera height above the floor.
    pub camera_height: f64,
    /// Floor-to-ceiling height.
    pub ceiling_height: f64,
}

impl Default for RoomParams {
    fn default() -> Self {
        Self {
            camera_height: 1.5,
            ceiling_height: 3.0,
        }
    }
}

impl RoomParams {
    /// Height of the ceiling above the camera.
    pub fn upper_height(&self) -> f64 {
        self.ceiling_height - self.camera_height
    }
}
