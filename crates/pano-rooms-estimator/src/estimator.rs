use log::debug;

use pano_rooms_core::CornerObservation;

use crate::depth::estimate_wall_depths;
use crate::result::{round2, RoomDimensions, RoomEstimate};
use crate::RoomParams;

/// Room dimension estimator: ordered corner observations in, audited
/// room estimate out.
///
/// Pure and stateless across invocations; identical inputs always yield
/// identical outputs.
pub struct RoomEstimator {
    params: RoomParams,
}

impl RoomEstimator {
    pub fn new(params: RoomParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RoomParams {
        &self.params
    }

    /// Estimate wall depths and room dimensions from ordered corners.
    ///
    /// Exactly four corners produce a rectangular estimate; any other
    /// count degrades to a perimeter-style sum of the wall depths.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "info", skip(self, corners), fields(n_corners = corners.len()))
    )]
    pub fn estimate(&self, corners: &[CornerObservation]) -> RoomEstimate {
        let wall_depths = estimate_wall_depths(corners, &self.params);
        let dimensions = aggregate_dimensions(&wall_depths);

        RoomEstimate {
            parameters: self.params,
            dimensions,
            wall_depths: wall_depths.iter().copied().map(round2).collect(),
            corners: corners.to_vec(),
        }
    }
}

/// Aggregate per-wall depths under the rectangular-room assumption.
///
/// Depths are paired toward opposite walls: `length = d0 + d2`,
/// `breadth = d1 + d3`. Dimensions are derived from the unrounded depths
/// and rounded once at the end.
fn aggregate_dimensions(wall_depths: &[f64]) -> RoomDimensions {
    if wall_depths.len() == 4 {
        let length = wall_depths[0] + wall_depths[2];
        let breadth = wall_depths[1] + wall_depths[3];
        RoomDimensions::Rectangular {
            length: round2(length),
            breadth: round2(breadth),
            area: round2(length * breadth),
        }
    } else {
        debug!(
            "{} walls, falling back to a perimeter-style sum",
            wall_depths.len()
        );
        RoomDimensions::Irregular {
            perimeter: round2(wall_depths.iter().sum()),
        }
    }
}
