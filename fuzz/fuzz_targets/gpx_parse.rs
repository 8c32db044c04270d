//! Fuzz target for GPX parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the GPX reader, checking
//! for panics, crashes, or hangs.

#![no_main]

use gpxrte::route::io_gpx_xml::from_gpx_slice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid excessive memory usage.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_gpx_slice(data);
});
