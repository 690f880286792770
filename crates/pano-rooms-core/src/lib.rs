//! Core types and the corner grouping pass for panorama room-geometry
//! estimation.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete layout-detection model or image type: raw
//! points arrive as normalized panorama coordinates and leave as ordered
//! wall-corner observations.

mod corner;
mod grouping;
mod logger;

pub use corner::CornerObservation;
pub use grouping::{group_corners, MERGE_THRESHOLD_PX, REFERENCE_IMAGE_WIDTH_PX};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;

/// A raw panorama-space point from the layout model.
///
/// `x` is the horizontal fraction `u` around the panorama and `y` is the
/// vertical fraction `v` (0 = zenith, 1 = nadir, 0.5 = camera-height
/// horizon). Serializes as a `[u, v]` pair.
pub type PanoPoint = nalgebra::Point2<f64>;
