use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// One physical wall corner summarized from a group of raw layout points.
///
/// Produced once per grouping pass and immutable afterwards. For raw
/// points inside `[0, 1] × [0, 1]` the fields satisfy
/// `0 ≤ ceil ≤ floor ≤ 1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CornerObservation {
    /// Representative horizontal position: mean `u` of the grouped points.
    pub x: f64,
    /// Topmost grouped `v` — the corner's ceiling-boundary estimate.
    pub ceil: f64,
    /// Bottommost grouped `v` — the corner's floor-boundary estimate.
    pub floor: f64,
}

impl CornerObservation {
    /// Horizontal angle of this corner around the panorama, in radians.
    pub fn azimuth(&self) -> f64 {
        self.x * TAU
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn azimuth_spans_full_turn() {
        let corner = CornerObservation {
            x: 0.25,
            ceil: 0.3,
            floor: 0.7,
        };
        assert_relative_eq!(corner.azimuth(), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn serializes_with_plain_fields() {
        let corner = CornerObservation {
            x: 0.5,
            ceil: 0.25,
            floor: 0.75,
        };
        let json = serde_json::to_value(corner).unwrap();
        assert_eq!(json["x"], 0.5);
        assert_eq!(json["ceil"], 0.25);
        assert_eq!(json["floor"], 0.75);
    }
}
