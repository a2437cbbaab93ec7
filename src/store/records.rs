use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::track::{GeodeticFix, Pass};

pub const SATELLITE_STATE_TABLE: &str = "satellite_state";
pub const ORBIT_PATH_TABLE: &str = "orbit_path";
pub const PASSES_TABLE: &str = "passes";

/// One row of the `satellite_state` table.
#[derive(Debug, Clone, Serialize)]
pub struct SatelliteStateRow {
    pub satellite_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_km: f64,
    pub velocity_kms: f64,
    pub timestamp: DateTime<Utc>,
}

/// One row of the `orbit_path` table.
#[derive(Debug, Clone, Serialize)]
pub struct OrbitPathRow {
    pub satellite_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_km: f64,
    pub timestamp: DateTime<Utc>,
}

impl OrbitPathRow {
    pub fn new(satellite_id: Uuid, fix: &GeodeticFix) -> Self {
        Self {
            satellite_id,
            latitude: fix.latitude_deg,
            longitude: fix.longitude_deg,
            altitude_km: fix.altitude_km,
            timestamp: fix.timestamp,
        }
    }
}

/// One row of the `passes` table.
#[derive(Debug, Clone, Serialize)]
pub struct PassRow {
    pub satellite_id: Uuid,
    pub aos: DateTime<Utc>,
    pub los: DateTime<Utc>,
    pub max_elevation_deg: f64,
    pub duration_sec: i64,
}

impl PassRow {
    pub fn new(satellite_id: Uuid, pass: &Pass) -> Self {
        Self {
            satellite_id,
            aos: pass.aos,
            los: pass.los,
            max_elevation_deg: pass.max_elevation_deg,
            duration_sec: pass.duration_sec,
        }
    }
}
