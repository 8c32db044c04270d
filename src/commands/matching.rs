//! Nearest-point matching of caller-supplied coordinates onto a route.

use crate::error::GpxrteError;
use crate::route::LatLon;

/// Resolves optional start/end target coordinates to point indices.
///
/// Each given target resolves independently to the index of the closest
/// route point (ties to the lowest index); an omitted target defaults to
/// the route's natural start or end. The returned `end` is inclusive.
/// A selection where `begin` is not strictly before `end` is rejected.
///
/// `coords` must be non-empty; the orchestration layer validates that
/// before calling.
pub fn match_range(
    coords: &[LatLon],
    start_target: Option<LatLon>,
    end_target: Option<LatLon>,
) -> Result<(usize, usize), GpxrteError> {
    let begin = match start_target {
        Some(target) => nearest_index(target, coords),
        None => 0,
    };
    let end = match end_target {
        Some(target) => nearest_index(target, coords),
        None => coords.len() - 1,
    };

    if begin >= end {
        return Err(GpxrteError::InvalidRange { begin, end });
    }
    Ok((begin, end))
}

/// Index of the coordinate closest to `target`; ties go to the lowest
/// index because only a strictly smaller distance displaces the best.
fn nearest_index(target: LatLon, coords: &[LatLon]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (index, coord) in coords.iter().enumerate() {
        let distance = target.distance_to(coord);
        if distance < best_distance {
            best_distance = distance;
            best = index;
        }
    }
    best
}
