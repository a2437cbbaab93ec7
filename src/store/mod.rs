mod client;
mod records;

pub use client::StoreClient;
pub use records::{
    OrbitPathRow, PassRow, SatelliteStateRow, ORBIT_PATH_TABLE, PASSES_TABLE,
    SATELLITE_STATE_TABLE,
};
