//! Wall-depth estimation and room dimension aggregation built on top of
//! `pano-rooms-core`.
//!
//! ## Quickstart
//!
//! ```
//! use pano_rooms_core::CornerObservation;
//! use pano_rooms_estimator::{RoomEstimator, RoomParams};
//!
//! let corners: Vec<CornerObservation> = Vec::new();
//! let estimator = RoomEstimator::new(RoomParams::default());
//!
//! let estimate = estimator.estimate(&corners);
//! println!("walls: {}", estimate.wall_depths.len());
//! ```
//!
//! Per wall segment (each pair of adjacent corners, wrapping):
//! 1. Pick the conservative floor/ceiling boundary reading of the pair.
//! 2. Convert each boundary to an angle from the horizon, clamped away
//!    from the degenerate near-horizon region.
//! 3. Derive two independent depths by trigonometry and fuse them with a
//!    disagreement-aware weighting rule, capped at a hard depth limit.
//!
//! Four walls are aggregated into a rectangular footprint
//! (length/breadth/area); any other count degrades to a perimeter-style
//! sum.

mod depth;
mod estimator;
mod footprint;
mod params;
mod result;

pub use depth::{
    estimate_wall_depths, MAX_DISAGREEMENT_M, MAX_WALL_DEPTH_M, MIN_BOUNDARY_ANGLE_RAD,
};
pub use estimator::RoomEstimator;
pub use footprint::{RectFootprint, WallPlacement};
pub use params::RoomParams;
pub use result::{RoomDimensions, RoomEstimate};
