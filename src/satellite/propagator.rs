use chrono::{DateTime, Utc};
use sgp4::{Constants, Elements};
use uuid::Uuid;

use super::error::SatelliteError;
use crate::config::SatelliteConfig;

/// Inertial state produced by the propagator for one epoch.
#[derive(Debug, Clone, Copy)]
pub struct StateVector {
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
    pub epoch: DateTime<Utc>,
}

impl StateVector {
    pub fn speed_km_s(&self) -> f64 {
        let [vx, vy, vz] = self.velocity_km_s;
        (vx * vx + vy * vy + vz * vz).sqrt()
    }
}

/// Source of state vectors for a single tracked object.
///
/// `None` means the propagator could not produce a valid state for that
/// epoch; callers skip the sample and continue scanning.
pub trait StateProvider {
    fn state_at(&self, epoch: DateTime<Utc>) -> Option<StateVector>;
}

pub struct Satellite {
    pub id: Uuid,
    pub name: String,
    pub norad_id: u32,
    elements: Elements,
    constants: Constants,
}

impl Satellite {
    /// Build the live propagator state from configured TLE lines.
    /// Malformed elements are fatal for the satellite; there is no
    /// degraded tracking mode.
    pub fn from_config(config: &SatelliteConfig) -> Result<Self, SatelliteError> {
        let elements = Elements::from_tle(
            Some(config.name.clone()),
            config.tle1.as_bytes(),
            config.tle2.as_bytes(),
        )?;
        let constants = Constants::from_elements(&elements)?;
        Ok(Self {
            id: config.id,
            name: config.name.clone(),
            norad_id: config.norad_id,
            elements,
            constants,
        })
    }
}

impl StateProvider for Satellite {
    fn state_at(&self, epoch: DateTime<Utc>) -> Option<StateVector> {
        let minutes = match self
            .elements
            .datetime_to_minutes_since_epoch(&epoch.naive_utc())
        {
            Ok(m) => m,
            Err(e) => {
                log::debug!("{}: epoch {} out of range: {}", self.name, epoch, e);
                return None;
            }
        };

        match self.constants.propagate(minutes) {
            Ok(prediction) => Some(StateVector {
                position_km: prediction.position,
                velocity_km_s: prediction.velocity,
                epoch,
            }),
            Err(e) => {
                log::debug!("{}: propagation failed at {}: {}", self.name, epoch, e);
                None
            }
        }
    }
}

pub fn build_registry(configs: &[SatelliteConfig]) -> Result<Vec<Satellite>, SatelliteError> {
    configs.iter().map(Satellite::from_config).collect()
}
