//! High-level facade crate for the `pano-rooms-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - end-to-end helpers that take the layout model's `uv` point payload
//!   and return an audited room estimate
//!
//! ## Quickstart
//!
//! ```
//! use pano_rooms::{estimate_room, PanoPoint, RoomParams};
//!
//! let points: Vec<PanoPoint> = vec![
//!     PanoPoint::new(0.10, 0.70),
//!     PanoPoint::new(0.10, 0.30),
//!     PanoPoint::new(0.35, 0.70),
//!     PanoPoint::new(0.35, 0.30),
//!     PanoPoint::new(0.60, 0.70),
//!     PanoPoint::new(0.60, 0.30),
//!     PanoPoint::new(0.85, 0.70),
//!     PanoPoint::new(0.85, 0.30),
//! ];
//!
//! let estimate = estimate_room(&points, &RoomParams::default());
//! println!(
//!     "{} x {} m, {} m^2",
//!     estimate.dimensions.length(),
//!     estimate.dimensions.breadth(),
//!     estimate.dimensions.area()
//! );
//! ```
//!
//! ## API map
//! - `pano_rooms::core`: panorama points, corner observations, grouping.
//! - `pano_rooms::estimator`: depth estimation and dimension aggregation.
//! - [`estimate_room`] / [`estimate_room_from_json`]: end-to-end helpers.
//! - [`RoomResponse`]: serialization envelope with a `status` field.

pub use pano_rooms_core as core;
pub use pano_rooms_estimator as estimator;

pub use pano_rooms_core::{group_corners, CornerObservation, PanoPoint};
pub use pano_rooms_estimator::{RoomDimensions, RoomEstimate, RoomEstimator, RoomParams};

mod estimate;
mod response;

pub use estimate::{
    estimate_room, estimate_room_from_json, estimate_room_from_value, LayoutInputError,
};
pub use response::{RoomResponse, RoomResults};
