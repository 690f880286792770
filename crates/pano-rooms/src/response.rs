use serde::{Deserialize, Serialize};

use pano_rooms_core::CornerObservation;
use pano_rooms_estimator::{RoomDimensions, RoomEstimate, RoomParams};

/// Dimension block of a [`RoomResponse`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomResults {
    #[serde(flatten)]
    pub dimensions: RoomDimensions,
    pub wall_depths: Vec<f64>,
}

/// Serialization envelope for callers speaking the layout backend's JSON
/// contract: a textual status, the echoed parameters, the dimension
/// results and the corners used.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomResponse {
    pub status: String,
    pub parameters: RoomParams,
    pub results: RoomResults,
    pub corners: Vec<CornerObservation>,
}

impl From<RoomEstimate> for RoomResponse {
    fn from(estimate: RoomEstimate) -> Self {
        Self {
            status: "success".to_owned(),
            parameters: estimate.parameters,
            results: RoomResults {
                dimensions: estimate.dimensions,
                wall_depths: estimate.wall_depths,
            },
            corners: estimate.corners,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{estimate_room, PanoPoint, RoomParams};

    fn square_estimate() -> RoomEstimate {
        let mut points = Vec::new();
        for u in [0.1, 0.35, 0.6, 0.85] {
            points.push(PanoPoint::new(u, 0.7));
            points.push(PanoPoint::new(u, 0.3));
        }
        estimate_room(&points, &RoomParams::default())
    }

    #[test]
    fn envelope_matches_the_backend_contract() {
        let response = RoomResponse::from(square_estimate());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["parameters"]["camera_height"], 1.5);
        assert_eq!(json["parameters"]["ceiling_height"], 3.0);
        assert!(json["results"]["length"].is_number());
        assert!(json["results"]["area"].is_number());
        assert_eq!(json["results"]["wall_depths"].as_array().unwrap().len(), 4);
        assert_eq!(json["corners"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn degraded_envelope_reports_a_perimeter() {
        let points = vec![
            PanoPoint::new(0.1, 0.7),
            PanoPoint::new(0.4, 0.7),
            PanoPoint::new(0.7, 0.7),
        ];
        let response = RoomResponse::from(estimate_room(&points, &RoomParams::default()));
        let json = serde_json::to_value(&response).unwrap();

        assert!(json["results"]["perimeter"].is_number());
        assert!(json["results"].get("area").is_none());
    }
}
