//! Geographic coordinate value type and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, for the spherical distance model.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A (latitude, longitude) pair in decimal degrees.
///
/// Immutable value type; all segment geometry is expressed through it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    /// Creates a new coordinate from latitude and longitude in degrees.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns true if both components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Haversine great-circle distance to `other`, in meters.
    ///
    /// Spherical Earth model; symmetric, and zero for identical coordinates.
    pub fn distance_to(&self, other: &LatLon) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }
}
