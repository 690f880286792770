use pano_rooms_core::{group_corners, PanoPoint};
use pano_rooms_estimator::{RoomEstimate, RoomEstimator, RoomParams};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced while reading the layout model's payload.
///
/// This is the only error channel of the pipeline: degenerate geometry,
/// estimate disagreement, odd corner counts and over-limit depths are
/// all absorbed by documented heuristics and surface in the numeric
/// output instead.
#[derive(thiserror::Error, Debug)]
pub enum LayoutInputError {
    #[error("layout payload is missing the 'uv' point collection")]
    MissingUv,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Run the full pipeline on raw layout points: group corners, estimate
/// wall depths, aggregate dimensions.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(points, params), fields(n_points = points.len()))
)]
pub fn estimate_room(points: &[PanoPoint], params: &RoomParams) -> RoomEstimate {
    let corners = group_corners(points);
    RoomEstimator::new(*params).estimate(&corners)
}

/// Run the pipeline on a parsed layout payload.
///
/// The payload must be an object carrying the `uv` key with a collection
/// of `[u, v]` pairs. A missing key fails before any grouping happens;
/// no partial result is produced.
pub fn estimate_room_from_value(
    payload: &serde_json::Value,
    params: &RoomParams,
) -> Result<RoomEstimate, LayoutInputError> {
    let uv = payload.get("uv").ok_or(LayoutInputError::MissingUv)?;
    let points: Vec<PanoPoint> = serde_json::from_value(uv.clone())?;
    Ok(estimate_room(&points, params))
}

/// Run the pipeline on a raw layout payload string.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(payload, params), fields(payload_len = payload.len()))
)]
pub fn estimate_room_from_json(
    payload: &str,
    params: &RoomParams,
) -> Result<RoomEstimate, LayoutInputError> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    estimate_room_from_value(&value, params)
}
