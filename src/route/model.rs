//! Core document model for GPX route files.
//!
//! This is the in-memory representation every command works through: the
//! GPX reader parses into it, the algorithms slice and clone it, and the
//! writer renders it back out. Only `<rte>` segments are modeled; tracks
//! and waypoints are out of scope.

use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::coord::LatLon;

/// A complete GPX route document: ordered segments plus metadata.
///
/// An unreadable or missing file never becomes an empty `Document`; that
/// case is the `NoDocument` error at the I/O layer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document-level metadata (geographic extent, last-modified time).
    #[serde(default)]
    pub metadata: Metadata,

    /// All route segments, in file order.
    pub segments: Vec<Segment>,
}

impl Document {
    /// Creates a single-segment document with freshly computed metadata:
    /// bounds folded from the segment's coordinates and a current UTC stamp.
    pub fn single(segment: Segment) -> Self {
        let bounds = Bounds::Empty.fold_all(segment.coords());
        Document {
            metadata: Metadata {
                bounds,
                time: Some(now_utc_zulu()),
            },
            segments: vec![segment],
        }
    }

    /// Folds the bounds of every segment in the document.
    ///
    /// Segments without points contribute nothing.
    pub fn folded_bounds(&self) -> Bounds {
        self.segments
            .iter()
            .fold(Bounds::Empty, |acc, segment| acc.fold_all(segment.coords()))
    }

    /// Recomputes `metadata` from current segment content: refolded bounds
    /// and a fresh modification time. Never reuses a stale cached extent.
    pub fn restamp(&mut self) {
        self.metadata.bounds = self.folded_bounds();
        self.metadata.time = Some(now_utc_zulu());
    }
}

/// Document metadata: the enclosing lat/lon rectangle and the
/// last-modified timestamp (ISO-8601 UTC, second precision, `Z` suffix).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub bounds: Bounds,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// One route (`<rte>`): an ordered polyline of points with an optional name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Segment {
    /// Route name; a `<rte>` may legitimately lack a `<name>` element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Ordered points; index 0 is the start of the route.
    pub points: Vec<Point>,
}

impl Segment {
    /// Creates a named segment over the given points.
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: Some(name.into()),
            points,
        }
    }

    /// A finite, restartable sequence of the segment's coordinates.
    pub fn coords(&self) -> impl Iterator<Item = LatLon> + '_ {
        self.points.iter().map(|point| point.coord)
    }

    /// The segment name, or the `"route"` fallback for unnamed segments.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("route")
    }
}

/// One route point (`<rtept>`): a coordinate plus its opaque payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Point {
    pub coord: LatLon,

    /// Child elements of the `<rtept>` (`<ele>`, `<time>`, ...), preserved
    /// verbatim and in order when the point is cloned. The algorithms never
    /// interpret them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<PointField>,
}

impl Point {
    /// Creates a bare point with no payload.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            coord: LatLon::new(lat, lon),
            fields: Vec::new(),
        }
    }
}

/// A single payload element of a route point: tag name and text content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointField {
    pub tag: String,
    pub text: String,
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn now_utc_zulu() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
