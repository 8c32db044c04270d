//! Sub-range extraction of a segment into a fresh single-segment document.

use std::path::Path;

use crate::error::GpxrteError;
use crate::route::{io_gpx_xml, Document, Segment};

/// Extracts `source.points[begin..end]` into a new single-segment
/// [`Document`].
///
/// The output segment's points are clones (payload preserved, order
/// preserved); its name is `name` when given, else the source name. The
/// document gets freshly folded bounds and a current UTC timestamp. The
/// source is never mutated.
///
/// `0 <= begin < end <= source.points.len()` is a caller contract; the
/// orchestration layer validates before calling.
pub fn extract(source: &Segment, begin: usize, end: usize, name: Option<&str>) -> Document {
    debug_assert!(begin < end && end <= source.points.len());

    let segment = Segment {
        name: Some(
            name.map(ToOwned::to_owned)
                .unwrap_or_else(|| source.display_name().to_owned()),
        ),
        points: source.points[begin..end].to_vec(),
    };
    Document::single(segment)
}

/// Extracts a sub-range and writes it straight to `out_path`.
pub fn write_extract(
    source: &Segment,
    begin: usize,
    end: usize,
    name: Option<&str>,
    out_path: &Path,
) -> Result<(), GpxrteError> {
    let doc = extract(source, begin, end, name);
    io_gpx_xml::write_gpx(out_path, &doc)
}
