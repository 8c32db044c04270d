use std::fs;
use std::path::Path;

/// One `<rte>` block, optionally named, with bare route points.
pub fn route_xml(name: Option<&str>, points: &[(f64, f64)]) -> String {
    let mut xml = String::from("  <rte>\n");
    if let Some(name) = name {
        xml.push_str(&format!("    <name>{name}</name>\n"));
    }
    for (lat, lon) in points {
        xml.push_str(&format!("    <rtept lat=\"{lat}\" lon=\"{lon}\"/>\n"));
    }
    xml.push_str("  </rte>\n");
    xml
}

/// A complete GPX document wrapping the given route blocks.
pub fn document_xml(routes: &[String]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <gpx version=\"1.1\" creator=\"fixture\" xmlns=\"http://www.topografix.com/GPX/1/1\">\n",
    );
    for route in routes {
        xml.push_str(route);
    }
    xml.push_str("</gpx>\n");
    xml
}

/// Writes a GPX fixture file built from the given route blocks.
pub fn write_document(path: &Path, routes: &[String]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, document_xml(routes)).expect("write gpx fixture");
}

/// Points along the equator spaced `step_m` meters apart.
pub fn equator_points(count: usize, step_m: f64) -> Vec<(f64, f64)> {
    const METERS_PER_DEGREE: f64 = 6_371_000.0 * std::f64::consts::PI / 180.0;
    (0..count)
        .map(|i| (0.0, i as f64 * step_m / METERS_PER_DEGREE))
        .collect()
}
