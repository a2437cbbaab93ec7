use chrono::{DateTime, Duration, Utc};

use crate::config::TrackingConfig;
use crate::satellite::{Satellite, StateProvider};
use crate::store::{
    OrbitPathRow, PassRow, SatelliteStateRow, StoreClient, ORBIT_PATH_TABLE, PASSES_TABLE,
    SATELLITE_STATE_TABLE,
};
use crate::track::{geodetic, ElevationScan, GroundTrack, PassDetector, Station};

/// Drives the samplers for every registered satellite and routes their
/// output to the store. Satellites are independent; a failure on one
/// never stops the others.
pub struct TrackingService {
    station: Station,
    tracking: TrackingConfig,
    satellites: Vec<Satellite>,
    store: StoreClient,
}

impl TrackingService {
    pub fn new(
        station: Station,
        tracking: TrackingConfig,
        satellites: Vec<Satellite>,
        store: StoreClient,
    ) -> Self {
        Self {
            station,
            tracking,
            satellites,
            store,
        }
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    /// Insert one live state row per satellite at the current instant.
    pub async fn update_all(&self) {
        let now = Utc::now();
        for satellite in &self.satellites {
            self.update_live_state(satellite, now).await;
        }
    }

    async fn update_live_state(&self, satellite: &Satellite, now: DateTime<Utc>) {
        let Some(state) = satellite.state_at(now) else {
            log::warn!("{}: no state at {}, skipping live update", satellite.name, now);
            return;
        };

        let geo = geodetic(state.position_km);
        self.store
            .insert(
                SATELLITE_STATE_TABLE,
                &SatelliteStateRow {
                    satellite_id: satellite.id,
                    latitude: geo.latitude_deg,
                    longitude: geo.longitude_deg,
                    altitude_km: geo.altitude_km,
                    velocity_kms: state.speed_km_s(),
                    timestamp: now,
                },
            )
            .await;
    }

    /// Regenerate the ground track and pass predictions for every
    /// satellite, full-replace. Each satellite's rows are cleared before
    /// repopulating, so a concurrent reader can observe an empty or
    /// partial set mid-resample.
    pub async fn resample_all(&self) {
        let now = Utc::now();
        for satellite in &self.satellites {
            self.resample_ground_track(satellite, now).await;
            self.resample_passes(satellite, now).await;
        }
    }

    async fn resample_ground_track(&self, satellite: &Satellite, now: DateTime<Utc>) {
        self.store
            .delete(ORBIT_PATH_TABLE, "satellite_id", &satellite.id.to_string())
            .await;

        let window = Duration::minutes(self.tracking.track_window_minutes);
        let step = Duration::seconds(self.tracking.track_step_secs);
        let mut count = 0usize;
        for fix in GroundTrack::new(satellite, now, window, step) {
            self.store
                .insert(ORBIT_PATH_TABLE, &OrbitPathRow::new(satellite.id, &fix))
                .await;
            count += 1;
        }
        log::info!("{}: ground track resampled, {} fixes", satellite.name, count);
    }

    async fn resample_passes(&self, satellite: &Satellite, now: DateTime<Utc>) {
        self.store
            .delete(PASSES_TABLE, "satellite_id", &satellite.id.to_string())
            .await;

        let horizon = Duration::hours(self.tracking.pass_horizon_hours);
        let step = Duration::seconds(self.tracking.pass_step_secs);
        let scan = ElevationScan::new(satellite, self.station, now, horizon, step);

        // Completed passes go out one by one, in detection order.
        let mut detector = PassDetector::new(self.tracking.min_elevation_deg);
        let mut count = 0usize;
        for sample in scan {
            if let Some(pass) = detector.feed(sample) {
                self.store
                    .insert(PASSES_TABLE, &PassRow::new(satellite.id, &pass))
                    .await;
                count += 1;
            }
        }
        log::info!("{}: {} passes predicted", satellite.name, count);
    }
}
