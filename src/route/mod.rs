//! Document model and GPX I/O for route files.
//!
//! This module is the hub the commands work through: a typed, owned
//! representation of one GPX file ([`Document`] → [`Segment`] → [`Point`])
//! plus the geometry value types ([`LatLon`], [`Bounds`]) and the GPX
//! reader/writer.
//!
//! # Design Principles
//!
//! 1. **Explicit emptiness**: "no bounds yet" is a tagged [`Bounds::Empty`]
//!    variant, not a sentinel rectangle, so folding and merging stay total.
//!
//! 2. **Opaque payload**: point payload elements are carried as ordered
//!    `(tag, text)` pairs and cloned verbatim; the algorithms only ever look
//!    at coordinates.
//!
//! 3. **Owned snapshots**: cloning a segment never shares mutable state
//!    with its source document, so extraction cannot mutate the input file.

mod bounds;
mod coord;
pub mod io_gpx_xml;
mod model;

// Re-export core types for convenient access
pub use bounds::Bounds;
pub use coord::LatLon;
pub use model::{now_utc_zulu, Document, Metadata, Point, PointField, Segment};
