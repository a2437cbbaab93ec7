use chrono::{DateTime, Duration, Utc};

use super::geodesy::geodetic;
use super::types::GeodeticFix;
use crate::satellite::StateProvider;

/// Fixed-cadence geodetic fixes over `[start, start + window)`.
///
/// Instants the propagator cannot serve are skipped, so the sequence may
/// come out shorter than `window / step`; it is never padded or
/// interpolated. Rebuilding the iterator with the same inputs replays the
/// same sequence.
pub struct GroundTrack<'a, P: StateProvider> {
    provider: &'a P,
    cursor: DateTime<Utc>,
    end: DateTime<Utc>,
    step: Duration,
}

impl<'a, P: StateProvider> GroundTrack<'a, P> {
    pub fn new(
        provider: &'a P,
        start: DateTime<Utc>,
        window: Duration,
        step: Duration,
    ) -> Self {
        Self {
            provider,
            cursor: start,
            end: start + window,
            step,
        }
    }
}

impl<P: StateProvider> Iterator for GroundTrack<'_, P> {
    type Item = GeodeticFix;

    fn next(&mut self) -> Option<GeodeticFix> {
        while self.cursor < self.end {
            let timestamp = self.cursor;
            self.cursor += self.step;
            if let Some(state) = self.provider.state_at(timestamp) {
                let geo = geodetic(state.position_km);
                return Some(GeodeticFix {
                    latitude_deg: geo.latitude_deg,
                    longitude_deg: geo.longitude_deg,
                    altitude_km: geo.altitude_km,
                    timestamp,
                });
            }
        }
        None
    }
}
