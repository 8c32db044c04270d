//! User-facing commands over GPX route files.
//!
//! Every command validates in the same fixed order (document present,
//! segments present, segment index in range, points present) and fails on
//! the first violation without writing anything. Output file naming is part
//! of the observable contract: downstream tooling globs on the `__atomic`,
//! `__NNN__distance` and `__BBBB_EEEE__coord` tags.

pub mod extract;
pub mod matching;
pub mod split;

use std::path::Path;

use crate::error::GpxrteError;
use crate::route::io_gpx_xml::{read_gpx, write_gpx};
use crate::route::{Document, LatLon, Segment};

use extract::write_extract;
use matching::match_range;
use split::split_ranges;

/// Rewrites the name of one route segment in place.
///
/// Fails with `NoName` when the segment has no name element to rewrite;
/// the file is rewritten only on success.
pub fn set_segment_name(
    file: &Path,
    segment_index: usize,
    new_name: &str,
) -> Result<(), GpxrteError> {
    let mut doc = read_gpx(file)?;
    checked_segment(&doc, file, segment_index)?;

    let segment = &mut doc.segments[segment_index];
    if segment.name.is_none() {
        return Err(GpxrteError::NoName {
            index: segment_index,
        });
    }
    segment.name = Some(new_name.to_owned());

    write_gpx(file, &doc)
}

/// Extracts whole segments verbatim, one output file per segment.
///
/// With an index, only that segment is pulled; without one, every segment
/// in the document is. Output files are named `{segment-name}__atomic.gpx`
/// and land next to the source file. Returns the number of files written.
pub fn pull_atomic(file: &Path, segment_index: Option<usize>) -> Result<usize, GpxrteError> {
    let doc = read_gpx(file)?;
    ensure_segments(&doc, file)?;
    let dir = parent_dir(file);

    match segment_index {
        Some(index) => {
            let segment = checked_segment(&doc, file, index)?;
            ensure_points(segment, index)?;
            write_atomic(segment, dir)?;
            Ok(1)
        }
        None => {
            // Validate every segment up front so a bad one in the middle
            // cannot leave partial output behind.
            for (index, segment) in doc.segments.iter().enumerate() {
                ensure_points(segment, index)?;
            }
            for segment in &doc.segments {
                write_atomic(segment, dir)?;
            }
            Ok(doc.segments.len())
        }
    }
}

fn write_atomic(segment: &Segment, dir: &Path) -> Result<(), GpxrteError> {
    let out_path = dir.join(format!("{}__atomic.gpx", segment.display_name()));
    write_extract(segment, 0, segment.points.len(), None, &out_path)
}

/// Trims one segment to the sub-range closest to the given coordinates and
/// writes it as a new single-segment file. Returns 1 on success.
pub fn pull_by_coord(
    file: &Path,
    segment_index: usize,
    start_target: Option<LatLon>,
    end_target: Option<LatLon>,
    out_file: &Path,
) -> Result<usize, GpxrteError> {
    let doc = read_gpx(file)?;
    let segment = checked_segment(&doc, file, segment_index)?;
    ensure_points(segment, segment_index)?;

    let coords: Vec<LatLon> = segment.coords().collect();
    let (begin, end) = match_range(&coords, start_target, end_target)?;

    let (stem, ext) = stem_and_ext(out_file);
    let name = format!("{stem}__{begin:04}_{end:04}__coord");
    let out_path = parent_dir(out_file).join(format!("{name}{ext}"));
    write_extract(segment, begin, end + 1, Some(&name), &out_path)?;
    Ok(1)
}

/// Splits one segment into pieces not exceeding `threshold_m` meters, one
/// output file per piece. Returns the number of pieces written (possibly 0).
pub fn pull_by_distance(
    file: &Path,
    segment_index: usize,
    out_file: &Path,
    threshold_m: f64,
) -> Result<usize, GpxrteError> {
    let doc = read_gpx(file)?;
    let segment = checked_segment(&doc, file, segment_index)?;
    ensure_points(segment, segment_index)?;

    let coords: Vec<LatLon> = segment.coords().collect();
    let ranges = split_ranges(&coords, threshold_m);

    let (stem, ext) = stem_and_ext(out_file);
    let dir = parent_dir(out_file);
    for (sequence, &(begin, end)) in ranges.iter().enumerate() {
        let name = format!("{stem}__{sequence:03}__distance");
        let out_path = dir.join(format!("{name}{ext}"));
        write_extract(segment, begin, end, Some(&name), &out_path)?;
    }
    Ok(ranges.len())
}

/// Merges segments from `source` into `dest`.
///
/// When `dest` already exists, the selected segment(s) are appended as
/// clones, the destination bounds are refolded over every segment now
/// present, and a fresh modification time is stamped. When it does not
/// exist, the whole source document (or the one selected segment) is
/// written to `dest` directly. Returns the resulting segment count at the
/// destination.
pub fn push(
    source: &Path,
    segment_index: Option<usize>,
    dest: &Path,
) -> Result<usize, GpxrteError> {
    let src_doc = read_gpx(source)?;
    ensure_segments(&src_doc, source)?;

    if dest.is_file() {
        let mut dest_doc = read_gpx(dest)?;

        match segment_index {
            None => dest_doc.segments.extend(src_doc.segments.iter().cloned()),
            Some(index) => {
                let segment = checked_segment(&src_doc, source, index)?;
                dest_doc.segments.push(segment.clone());
            }
        }

        dest_doc.restamp();
        write_gpx(dest, &dest_doc)?;
        Ok(dest_doc.segments.len())
    } else {
        match segment_index {
            None => {
                write_gpx(dest, &src_doc)?;
                Ok(src_doc.segments.len())
            }
            Some(index) => {
                let segment = checked_segment(&src_doc, source, index)?;
                ensure_points(segment, index)?;
                write_extract(segment, 0, segment.points.len(), None, dest)?;
                Ok(1)
            }
        }
    }
}

fn ensure_segments(doc: &Document, path: &Path) -> Result<(), GpxrteError> {
    if doc.segments.is_empty() {
        return Err(GpxrteError::NoSegments {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn checked_segment<'a>(
    doc: &'a Document,
    path: &Path,
    index: usize,
) -> Result<&'a Segment, GpxrteError> {
    ensure_segments(doc, path)?;
    doc.segments
        .get(index)
        .ok_or(GpxrteError::IllegalSegmentIndex {
            index,
            count: doc.segments.len(),
        })
}

fn ensure_points(segment: &Segment, index: usize) -> Result<(), GpxrteError> {
    if segment.points.is_empty() {
        return Err(GpxrteError::NoPoints { index });
    }
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or(Path::new(""))
}

fn stem_and_ext(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_owned());
    let ext = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    (stem, ext)
}
