use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub station: StationConfig,
    #[serde(default)]
    pub tracking: TrackingConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub web: WebConfig,
    pub satellites: Vec<SatelliteConfig>,
}

/// Ground station location. Latitude/longitude are degrees; altitude is
/// kilometers above the spherical Earth radius.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StationConfig {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    #[serde(default)]
    pub altitude_km: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TrackingConfig {
    #[serde(default = "default_min_elevation")]
    pub min_elevation_deg: f64,
    #[serde(default = "default_update_interval")]
    pub update_interval_secs: u64,
    #[serde(default = "default_track_window")]
    pub track_window_minutes: i64,
    #[serde(default = "default_track_step")]
    pub track_step_secs: i64,
    #[serde(default = "default_pass_horizon")]
    pub pass_horizon_hours: i64,
    #[serde(default = "default_pass_step")]
    pub pass_step_secs: i64,
    #[serde(default = "default_resample_interval")]
    pub resample_interval_hours: u64,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            min_elevation_deg: default_min_elevation(),
            update_interval_secs: default_update_interval(),
            track_window_minutes: default_track_window(),
            track_step_secs: default_track_step(),
            pass_horizon_hours: default_pass_horizon(),
            pass_step_secs: default_pass_step(),
            resample_interval_hours: default_resample_interval(),
        }
    }
}

fn default_min_elevation() -> f64 {
    10.0
}

fn default_update_interval() -> u64 {
    10
}

fn default_track_window() -> i64 {
    30
}

fn default_track_step() -> i64 {
    30
}

fn default_pass_horizon() -> i64 {
    24
}

fn default_pass_step() -> i64 {
    20
}

fn default_resample_interval() -> u64 {
    6
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub base_url: String,
    pub service_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SatelliteConfig {
    pub id: Uuid,
    pub name: String,
    pub norad_id: u32,
    pub tle1: String,
    pub tle2: String,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
