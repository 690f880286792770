use serde::{Deserialize, Serialize};

use pano_rooms_core::CornerObservation;

use crate::footprint::RectFootprint;
use crate::RoomParams;

/// Room dimensions derived from the per-wall depths.
///
/// Serializes untagged: the rectangular case carries `length`, `breadth`
/// and `area`; the degraded case carries only `perimeter`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomDimensions {
    /// Exactly four walls: the rectangular-room assumption holds.
    Rectangular {
        /// Sum of the two opposing depths along one axis.
        length: f64,
        /// Sum of the two opposing depths along the other axis.
        breadth: f64,
        area: f64,
    },
    /// Any other wall count. `perimeter` is the sum of all wall depths —
    /// a documented degraded output, not a geometric perimeter.
    Irregular { perimeter: f64 },
}

impl RoomDimensions {
    /// Room length, or 0.0 when the rectangular assumption failed.
    pub fn length(&self) -> f64 {
        match self {
            Self::Rectangular { length, .. } => *length,
            Self::Irregular { .. } => 0.0,
        }
    }

    /// Room breadth, or 0.0 when the rectangular assumption failed.
    pub fn breadth(&self) -> f64 {
        match self {
            Self::Rectangular { breadth, .. } => *breadth,
            Self::Irregular { .. } => 0.0,
        }
    }

    /// Floor area, or 0.0 when the rectangular assumption failed.
    pub fn area(&self) -> f64 {
        match self {
            Self::Rectangular { area, .. } => *area,
            Self::Irregular { .. } => 0.0,
        }
    }
}

/// Output of a room estimation run.
///
/// Echoes the height parameters and every intermediate value so a caller
/// can audit or re-derive the result. All numbers are rounded to two
/// decimal places. A successful estimate is best-effort, never a
/// verified measurement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomEstimate {
    /// Height parameters the estimate was computed with.
    pub parameters: RoomParams,
    pub dimensions: RoomDimensions,
    /// One fused depth per wall segment, in corner order.
    pub wall_depths: Vec<f64>,
    /// The corner observations the walls were derived from.
    pub corners: Vec<CornerObservation>,
}

impl RoomEstimate {
    /// Origin-centered rectangular footprint, when the rectangular
    /// assumption held.
    pub fn footprint(&self) -> Option<RectFootprint> {
        match self.dimensions {
            RoomDimensions::Rectangular {
                length, breadth, ..
            } => Some(RectFootprint { length, breadth }),
            RoomDimensions::Irregular { .. } => None,
        }
    }
}

/// Round to two decimal places, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
