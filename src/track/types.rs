use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single point of a satellite ground track.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GeodeticFix {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,
    pub timestamp: DateTime<Utc>,
}

/// One measurement of the pass scan.
#[derive(Debug, Clone, Copy)]
pub struct ElevationSample {
    pub elevation_deg: f64,
    pub timestamp: DateTime<Utc>,
}

/// A completed visibility window over the ground station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pass {
    pub aos: DateTime<Utc>,
    pub los: DateTime<Utc>,
    pub max_elevation_deg: f64,
    pub duration_sec: i64,
}
