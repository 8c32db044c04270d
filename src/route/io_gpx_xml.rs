//! GPX reader and writer for route documents.
//!
//! Reading goes through `roxmltree`; writing builds the XML by hand so the
//! output layout stays stable. Only `<rte>` segments are read and written;
//! `<trk>` and `<wpt>` structures are ignored. There is no schema
//! validation beyond what is needed to load a usable document.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::Node;

use super::bounds::Bounds;
use super::model::{Document, Metadata, Point, PointField, Segment};
use crate::error::GpxrteError;

const GPX_XMLNS: &str = "http://www.topografix.com/GPX/1/1";

/// Read a GPX file into a [`Document`].
///
/// Any failure to load (missing file, malformed XML, wrong root element,
/// unparsable point coordinates) is the absent-document condition.
pub fn read_gpx(path: &Path) -> Result<Document, GpxrteError> {
    let xml = fs::read_to_string(path).map_err(|source| GpxrteError::NoDocument {
        path: path.to_path_buf(),
        message: source.to_string(),
    })?;
    from_gpx_str(&xml, path)
}

/// Parse GPX from a UTF-8 string.
///
/// `path` is only used for error context. This helper is also the seam for
/// testing/fuzzing parse behavior in-memory.
pub fn from_gpx_str(xml: &str, path: &Path) -> Result<Document, GpxrteError> {
    let document = roxmltree::Document::parse(xml).map_err(|source| GpxrteError::NoDocument {
        path: path.to_path_buf(),
        message: source.to_string(),
    })?;

    let gpx = document.root_element();
    if gpx.tag_name().name() != "gpx" {
        return Err(GpxrteError::NoDocument {
            path: path.to_path_buf(),
            message: format!(
                "expected <gpx> root element, found <{}>",
                gpx.tag_name().name()
            ),
        });
    }

    let metadata = child_element(gpx, "metadata")
        .map(parse_metadata)
        .unwrap_or_default();

    let mut segments = Vec::new();
    for rte in gpx
        .children()
        .filter(|node| node.is_element() && node.tag_name().name() == "rte")
    {
        segments.push(parse_rte(rte, path)?);
    }

    Ok(Document { metadata, segments })
}

/// Parse GPX from bytes.
///
/// The input must be valid UTF-8.
pub fn from_gpx_slice(bytes: &[u8]) -> Result<Document, GpxrteError> {
    let xml = std::str::from_utf8(bytes).map_err(|source| GpxrteError::NoDocument {
        path: PathBuf::from("<memory>"),
        message: format!("input is not valid UTF-8: {source}"),
    })?;
    from_gpx_str(xml, Path::new("<memory>"))
}

fn parse_metadata(metadata: Node<'_, '_>) -> Metadata {
    let time = optional_child_text(metadata, "time");

    // Bounds are recomputed by every mutating command, so a missing or
    // partially-specified <bounds> element just reads as Empty.
    let bounds = child_element(metadata, "bounds")
        .and_then(|bounds| {
            let min_lat = parse_attr_f64(bounds, "minlat")?;
            let min_lon = parse_attr_f64(bounds, "minlon")?;
            let max_lat = parse_attr_f64(bounds, "maxlat")?;
            let max_lon = parse_attr_f64(bounds, "maxlon")?;
            Some(Bounds::Rect {
                min_lat,
                min_lon,
                max_lat,
                max_lon,
            })
        })
        .unwrap_or(Bounds::Empty);

    Metadata { bounds, time }
}

fn parse_rte(rte: Node<'_, '_>, path: &Path) -> Result<Segment, GpxrteError> {
    let name = optional_child_text(rte, "name");

    let mut points = Vec::new();
    for rtept in rte
        .children()
        .filter(|node| node.is_element() && node.tag_name().name() == "rtept")
    {
        let lat = required_attr_f64(rtept, "lat", path)?;
        let lon = required_attr_f64(rtept, "lon", path)?;

        let mut fields = Vec::new();
        for child in rtept.children().filter(|node| node.is_element()) {
            fields.push(PointField {
                tag: child.tag_name().name().to_string(),
                text: child.text().map(str::trim).unwrap_or_default().to_string(),
            });
        }

        let mut point = Point::new(lat, lon);
        point.fields = fields;
        points.push(point);
    }

    Ok(Segment { name, points })
}

fn required_attr_f64(node: Node<'_, '_>, attr: &str, path: &Path) -> Result<f64, GpxrteError> {
    let raw = node
        .attribute(attr)
        .ok_or_else(|| GpxrteError::NoDocument {
            path: path.to_path_buf(),
            message: format!("missing {attr} attribute on <{}>", node.tag_name().name()),
        })?;
    raw.parse::<f64>().map_err(|_| GpxrteError::NoDocument {
        path: path.to_path_buf(),
        message: format!(
            "invalid {attr} value '{raw}' on <{}>; expected floating-point number",
            node.tag_name().name()
        ),
    })
}

fn parse_attr_f64(node: Node<'_, '_>, attr: &str) -> Option<f64> {
    node.attribute(attr)?.parse::<f64>().ok()
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
}

fn optional_child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    child_element(node, tag)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}

/// Render a [`Document`] as a GPX string.
pub fn to_gpx_string(doc: &Document) -> String {
    let mut xml = String::new();

    writeln!(xml, "<?xml version=\"1.0\" encoding=\"utf-8\"?>").expect("write to string");
    writeln!(
        xml,
        "<gpx version=\"1.1\" creator=\"gpxrte\" xmlns=\"{GPX_XMLNS}\">"
    )
    .expect("write to string");

    let has_time = doc.metadata.time.is_some();
    let has_bounds = !doc.metadata.bounds.is_empty();
    if has_time || has_bounds {
        writeln!(xml, "  <metadata>").expect("write to string");
        if let Some(time) = &doc.metadata.time {
            writeln!(xml, "    <time>{}</time>", xml_escape(time)).expect("write to string");
        }
        if let Bounds::Rect {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        } = doc.metadata.bounds
        {
            writeln!(
                xml,
                "    <bounds minlat=\"{min_lat}\" minlon=\"{min_lon}\" maxlat=\"{max_lat}\" maxlon=\"{max_lon}\"/>"
            )
            .expect("write to string");
        }
        writeln!(xml, "  </metadata>").expect("write to string");
    }

    for segment in &doc.segments {
        writeln!(xml, "  <rte>").expect("write to string");
        if let Some(name) = &segment.name {
            writeln!(xml, "    <name>{}</name>", xml_escape(name)).expect("write to string");
        }
        for point in &segment.points {
            if point.fields.is_empty() {
                writeln!(
                    xml,
                    "    <rtept lat=\"{}\" lon=\"{}\"/>",
                    point.coord.lat, point.coord.lon
                )
                .expect("write to string");
                continue;
            }
            writeln!(
                xml,
                "    <rtept lat=\"{}\" lon=\"{}\">",
                point.coord.lat, point.coord.lon
            )
            .expect("write to string");
            for field in &point.fields {
                writeln!(
                    xml,
                    "      <{0}>{1}</{0}>",
                    field.tag,
                    xml_escape(&field.text)
                )
                .expect("write to string");
            }
            writeln!(xml, "    </rtept>").expect("write to string");
        }
        writeln!(xml, "  </rte>").expect("write to string");
    }

    writeln!(xml, "</gpx>").expect("write to string");
    xml
}

/// Write a [`Document`] as a GPX file.
pub fn write_gpx(path: &Path, doc: &Document) -> Result<(), GpxrteError> {
    fs::write(path, to_gpx_string(doc)).map_err(GpxrteError::Io)
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
