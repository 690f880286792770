//! Per-wall depth estimation.
//!
//! Each wall segment yields two independent depth estimates — one from
//! the floor boundary, one from the ceiling boundary — which rarely
//! agree on real panoramas (wavy stitches, tilt, detector jitter). The
//! fusion rule below resolves them deterministically.

use log::debug;

use pano_rooms_core::CornerObservation;

use crate::RoomParams;

/// Minimum boundary angle from the horizon, in radians. Readings closer
/// to the horizon than this are clamped to keep the tangent finite and
/// positive.
pub const MIN_BOUNDARY_ANGLE_RAD: f64 = 0.05;

/// Above this floor/ceiling depth disagreement the estimates are not
/// averaged; the smaller one wins.
pub const MAX_DISAGREEMENT_M: f64 = 2.0;

/// Hard cap on any fused wall depth. Larger values are treated as
/// measurement glitches.
pub const MAX_WALL_DEPTH_M: f64 = 12.0;

const FLOOR_WEIGHT: f64 = 0.6;
const CEIL_WEIGHT: f64 = 0.4;

/// Estimate one fused depth per wall segment.
///
/// Segment `i` connects corner `i` and corner `(i + 1) mod N`, wrapping
/// so the last wall closes back onto the first. The output keeps the
/// corner order. Values are unrounded.
pub fn estimate_wall_depths(corners: &[CornerObservation], params: &RoomParams) -> Vec<f64> {
    (0..corners.len())
        .map(|i| {
            let c1 = &corners[i];
            let c2 = &corners[(i + 1) % corners.len()];
            segment_depth(c1, c2, params)
        })
        .collect()
}

/// Fused depth for a single wall segment.
fn segment_depth(c1: &CornerObservation, c2: &CornerObservation, params: &RoomParams) -> f64 {
    // The lower of the two floor readings (larger v) is the safer pick
    // against wavy stitches; symmetrically the ceiling reading closer to
    // the zenith (smaller v).
    let floor_v = c1.floor.max(c2.floor);
    let angle_down = boundary_angle((floor_v - 0.5) * std::f64::consts::PI);
    let depth_floor = params.camera_height / angle_down.tan();

    let ceil_v = c1.ceil.min(c2.ceil);
    let angle_up = boundary_angle((0.5 - ceil_v) * std::f64::consts::PI);
    let depth_ceil = params.upper_height() / angle_up.tan();

    let diff = (depth_floor - depth_ceil).abs();
    let fused = if diff > MAX_DISAGREEMENT_M {
        // Too far apart to average; the closer wall is the safer
        // assumption.
        debug!("depth disagreement {diff:.2} m, taking min of ({depth_floor:.2}, {depth_ceil:.2})");
        depth_floor.min(depth_ceil)
    } else {
        FLOOR_WEIGHT * depth_floor + CEIL_WEIGHT * depth_ceil
    };

    if fused > MAX_WALL_DEPTH_M {
        debug!("capping wall depth {fused:.2} m at {MAX_WALL_DEPTH_M} m");
        MAX_WALL_DEPTH_M
    } else {
        fused
    }
}

/// Clamp a boundary angle away from the horizon.
fn boundary_angle(raw: f64) -> f64 {
    if raw < MIN_BOUNDARY_ANGLE_RAD {
        MIN_BOUNDARY_ANGLE_RAD
    } else {
        raw
    }
}
