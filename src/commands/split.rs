//! Distance-budget splitting of a route polyline.

use crate::route::LatLon;

/// Walks consecutive point pairs and emits half-open `[begin, end)` ranges
/// each time the accumulated distance reaches `threshold_m` meters.
///
/// The pair that trips the threshold is re-counted as the first step of the
/// next range, so consecutive ranges overlap by exactly one point and the
/// output pieces stay geographically contiguous. Trailing distance below
/// the threshold is dropped; a route that never reaches the threshold
/// yields no ranges at all.
pub fn split_ranges(coords: &[LatLon], threshold_m: f64) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();

    let mut begin = 0usize;
    let mut accumulated = 0.0f64;
    for end in 1..coords.len() {
        let step = coords[end - 1].distance_to(&coords[end]);
        accumulated += step;
        if accumulated < threshold_m {
            continue;
        }
        ranges.push((begin, end));
        begin = end - 1;
        accumulated = step;
    }

    ranges
}
