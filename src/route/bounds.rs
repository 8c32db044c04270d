//! Axis-aligned geographic bounding rectangle with an explicit empty state.

use serde::{Deserialize, Serialize};

use super::coord::LatLon;

/// The minimal lat/lon rectangle enclosing a set of coordinates.
///
/// `Empty` stands for "no points folded yet" and is the identity of both
/// [`fold`](Bounds::fold) and [`merge`](Bounds::merge), which keeps the two
/// operations total. Folding is order-independent, so the bounds of a union
/// of point sets equal the pairwise merge of the individually-computed
/// bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Bounds {
    Empty,
    Rect {
        min_lat: f64,
        min_lon: f64,
        max_lat: f64,
        max_lon: f64,
    },
}

impl Bounds {
    /// A degenerate rectangle covering a single coordinate.
    #[inline]
    pub fn of_point(point: LatLon) -> Self {
        Bounds::Rect {
            min_lat: point.lat,
            min_lon: point.lon,
            max_lat: point.lat,
            max_lon: point.lon,
        }
    }

    /// Widens the rectangle to include `point`.
    pub fn fold(self, point: LatLon) -> Self {
        match self {
            Bounds::Empty => Bounds::of_point(point),
            Bounds::Rect {
                min_lat,
                min_lon,
                max_lat,
                max_lon,
            } => Bounds::Rect {
                min_lat: min_lat.min(point.lat),
                min_lon: min_lon.min(point.lon),
                max_lat: max_lat.max(point.lat),
                max_lon: max_lon.max(point.lon),
            },
        }
    }

    /// Repeated [`fold`](Bounds::fold) over a coordinate sequence.
    pub fn fold_all<I>(self, points: I) -> Self
    where
        I: IntoIterator<Item = LatLon>,
    {
        points.into_iter().fold(self, Bounds::fold)
    }

    /// Union of two rectangles; `Empty` is the identity.
    pub fn merge(self, other: Bounds) -> Self {
        match (self, other) {
            (Bounds::Empty, b) => b,
            (a, Bounds::Empty) => a,
            (
                Bounds::Rect {
                    min_lat: a_min_lat,
                    min_lon: a_min_lon,
                    max_lat: a_max_lat,
                    max_lon: a_max_lon,
                },
                Bounds::Rect {
                    min_lat: b_min_lat,
                    min_lon: b_min_lon,
                    max_lat: b_max_lat,
                    max_lon: b_max_lon,
                },
            ) => Bounds::Rect {
                min_lat: a_min_lat.min(b_min_lat),
                min_lon: a_min_lon.min(b_min_lon),
                max_lat: a_max_lat.max(b_max_lat),
                max_lon: a_max_lon.max(b_max_lon),
            },
        }
    }

    /// Returns true if `point` lies inside or on the edge of the rectangle.
    pub fn contains(&self, point: LatLon) -> bool {
        match *self {
            Bounds::Empty => false,
            Bounds::Rect {
                min_lat,
                min_lon,
                max_lat,
                max_lon,
            } => {
                point.lat >= min_lat
                    && point.lat <= max_lat
                    && point.lon >= min_lon
                    && point.lon <= max_lon
            }
        }
    }

    /// Returns true when no coordinate has been folded in.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Bounds::Empty)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_into_empty_is_degenerate_point_rect() {
        let p = LatLon::new(10.0, 20.0);
        assert_eq!(Bounds::Empty.fold(p), Bounds::of_point(p));
    }

    #[test]
    fn fold_all_contains_every_input() {
        let points = [
            LatLon::new(1.0, -3.0),
            LatLon::new(-2.0, 7.0),
            LatLon::new(4.5, 0.5),
        ];
        let bounds = Bounds::Empty.fold_all(points);
        for p in points {
            assert!(bounds.contains(p), "{p:?} not in {bounds:?}");
        }
        assert_eq!(
            bounds,
            Bounds::Rect {
                min_lat: -2.0,
                min_lon: -3.0,
                max_lat: 4.5,
                max_lon: 7.0,
            }
        );
    }

    #[test]
    fn fold_is_idempotent_on_repeated_input() {
        let p = LatLon::new(3.0, 4.0);
        let once = Bounds::Empty.fold(p);
        assert_eq!(once.fold(p), once);
    }

    #[test]
    fn merge_is_commutative_with_empty_identity() {
        let a = Bounds::Empty.fold_all([LatLon::new(0.0, 0.0), LatLon::new(1.0, 1.0)]);
        let b = Bounds::Empty.fold_all([LatLon::new(-1.0, 2.0)]);
        assert_eq!(a.merge(b), b.merge(a));
        assert_eq!(Bounds::Empty.merge(a), a);
        assert_eq!(a.merge(Bounds::Empty), a);
    }

    #[test]
    fn merge_of_split_sets_equals_fold_of_union() {
        let left = [LatLon::new(0.0, 0.0), LatLon::new(2.0, -1.0)];
        let right = [LatLon::new(-3.0, 5.0), LatLon::new(1.0, 1.0)];
        let merged = Bounds::Empty
            .fold_all(left)
            .merge(Bounds::Empty.fold_all(right));
        let folded = Bounds::Empty.fold_all(left.into_iter().chain(right));
        assert_eq!(merged, folded);
    }
}
