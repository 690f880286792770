//! Corner grouping: collapse raw layout points into one observation per
//! physical wall corner.
//!
//! The layout model reports several nearby points per corner (floor and
//! ceiling boundaries, plus jitter). Grouping walks the points sorted by
//! `u` and chains each point onto the current group while it stays within
//! [`MERGE_THRESHOLD_PX`] of the most recently added point, scaled to a
//! [`REFERENCE_IMAGE_WIDTH_PX`]-wide image. Chaining on the *previous*
//! point (not the group centroid) can merge a dense run of points into
//! one over-wide group; that drift is part of the contract and must not
//! be replaced with true clustering.

use log::debug;

use crate::{CornerObservation, PanoPoint};

/// Width of the reference panorama image the pixel threshold refers to.
pub const REFERENCE_IMAGE_WIDTH_PX: f64 = 1024.0;

/// Two points closer than this (in reference-image pixels) join a group.
pub const MERGE_THRESHOLD_PX: f64 = 20.0;

/// Group raw layout points into ordered wall-corner observations.
///
/// The output is ordered by ascending `x`, which follows the angular
/// ordering of walls around the panorama. An empty input yields an empty
/// output; a single point forms its own one-point group.
pub fn group_corners(points: &[PanoPoint]) -> Vec<CornerObservation> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

    let mut corners = Vec::new();
    let mut group_us = vec![sorted[0].x];
    let mut group_vs = vec![sorted[0].y];

    for p in &sorted[1..] {
        let curr_px = p.x * REFERENCE_IMAGE_WIDTH_PX;
        let prev_px = group_us[group_us.len() - 1] * REFERENCE_IMAGE_WIDTH_PX;

        if curr_px - prev_px < MERGE_THRESHOLD_PX {
            group_us.push(p.x);
            group_vs.push(p.y);
        } else {
            corners.push(close_group(&group_us, &group_vs));
            group_us = vec![p.x];
            group_vs = vec![p.y];
        }
    }
    corners.push(close_group(&group_us, &group_vs));

    debug!(
        "grouped {} raw points into {} corners",
        points.len(),
        corners.len()
    );
    corners
}

fn close_group(us: &[f64], vs: &[f64]) -> CornerObservation {
    let x = us.iter().sum::<f64>() / us.len() as f64;
    let ceil = vs.iter().copied().fold(f64::INFINITY, f64::min);
    let floor = vs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    CornerObservation { x, ceil, floor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point2;

    fn pt(u: f64, v: f64) -> PanoPoint {
        Point2::new(u, v)
    }

    #[test]
    fn empty_input_yields_no_corners() {
        assert!(group_corners(&[]).is_empty());
    }

    #[test]
    fn single_point_forms_its_own_group() {
        let corners = group_corners(&[pt(0.4, 0.55)]);
        assert_eq!(corners.len(), 1);
        assert_relative_eq!(corners[0].x, 0.4);
        assert_relative_eq!(corners[0].ceil, 0.55);
        assert_relative_eq!(corners[0].floor, 0.55);
    }

    #[test]
    fn points_within_threshold_share_a_group() {
        // 19 px apart at the reference width: just inside the threshold.
        let d = 19.0 / REFERENCE_IMAGE_WIDTH_PX;
        let corners = group_corners(&[pt(0.3, 0.7), pt(0.3 + d, 0.3)]);
        assert_eq!(corners.len(), 1);
        assert_relative_eq!(corners[0].x, 0.3 + d / 2.0);
        assert_relative_eq!(corners[0].ceil, 0.3);
        assert_relative_eq!(corners[0].floor, 0.7);
    }

    #[test]
    fn points_at_threshold_start_a_new_group() {
        // Exactly 20 px apart: the strict `< 20` rule splits them.
        let d = 20.0 / REFERENCE_IMAGE_WIDTH_PX;
        let corners = group_corners(&[pt(0.3, 0.7), pt(0.3 + d, 0.3)]);
        assert_eq!(corners.len(), 2);
    }

    #[test]
    fn grouping_is_permutation_invariant() {
        let points = [
            pt(0.61, 0.72),
            pt(0.1, 0.65),
            pt(0.6, 0.31),
            pt(0.102, 0.29),
            pt(0.35, 0.7),
        ];
        let mut shuffled = points;
        shuffled.reverse();

        let a = group_corners(&points);
        let b = group_corners(&shuffled);
        assert_eq!(a.len(), b.len());
        for (ca, cb) in a.iter().zip(&b) {
            assert_relative_eq!(ca.x, cb.x);
            assert_relative_eq!(ca.ceil, cb.ceil);
            assert_relative_eq!(ca.floor, cb.floor);
        }
    }

    #[test]
    fn output_is_ordered_and_invariant_holds() {
        let points = [
            pt(0.85, 0.7),
            pt(0.1, 0.7),
            pt(0.1, 0.3),
            pt(0.35, 0.3),
            pt(0.35, 0.7),
            pt(0.6, 0.55),
            pt(0.85, 0.3),
        ];
        let corners = group_corners(&points);
        assert_eq!(corners.len(), 4);
        for pair in corners.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
        for c in &corners {
            assert!(0.0 <= c.ceil && c.ceil <= c.floor && c.floor <= 1.0);
        }
    }

    #[test]
    fn chain_proximity_merges_a_dense_run() {
        // Each point is 15 px from the previous one; the run spans 60 px
        // yet stays one group. Chain proximity drifts like this on
        // purpose.
        let step = 15.0 / REFERENCE_IMAGE_WIDTH_PX;
        let points: Vec<PanoPoint> = (0..5).map(|i| pt(0.2 + i as f64 * step, 0.5)).collect();
        let corners = group_corners(&points);
        assert_eq!(corners.len(), 1);
        assert_relative_eq!(corners[0].x, 0.2 + 2.0 * step);
    }
}
