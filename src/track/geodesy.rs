//! Spherical-Earth geometry shared by the ground track and the pass scan.
//!
//! The inertial frame is treated as if it were Earth-fixed: neither the
//! satellite position nor the station vector is rotated by sidereal time,
//! so longitudes drift from geographic longitude with time since the
//! element-set epoch. The station vector follows the same convention,
//! which keeps elevation angles self-consistent with [`geodetic`].

use crate::config::StationConfig;

pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Latitude/longitude/altitude derived from an inertial position.
#[derive(Debug, Clone, Copy)]
pub struct Geodetic {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_km: f64,
}

/// Convert an inertial position vector (kilometers) to geodetic
/// coordinates. A zero vector yields `atan2(0, 0)` angles rather than an
/// error; callers tolerate the nominal result.
pub fn geodetic(position_km: [f64; 3]) -> Geodetic {
    let [x, y, z] = position_km;
    let longitude_deg = y.atan2(x).to_degrees();
    let latitude_deg = z.atan2((x * x + y * y).sqrt()).to_degrees();
    let altitude_km = (x * x + y * y + z * z).sqrt() - EARTH_RADIUS_KM;
    Geodetic {
        latitude_deg,
        longitude_deg,
        altitude_km,
    }
}

/// Ground station with its position vector precomputed once.
///
/// Altitude is kilometers, consistent with [`EARTH_RADIUS_KM`].
#[derive(Debug, Clone, Copy)]
pub struct Station {
    position_km: [f64; 3],
    magnitude_km: f64,
}

impl Station {
    pub fn new(latitude_rad: f64, longitude_rad: f64, altitude_km: f64) -> Self {
        let r = EARTH_RADIUS_KM + altitude_km;
        let position_km = [
            r * latitude_rad.cos() * longitude_rad.cos(),
            r * latitude_rad.cos() * longitude_rad.sin(),
            r * latitude_rad.sin(),
        ];
        Self {
            position_km,
            magnitude_km: r,
        }
    }

    pub fn from_config(config: &StationConfig) -> Self {
        Self::new(
            config.latitude_deg.to_radians(),
            config.longitude_deg.to_radians(),
            config.altitude_km,
        )
    }

    /// Elevation of `position_km` above the station's local horizon, in
    /// degrees. The projection ratio is clamped to asin's domain before
    /// the inverse-sine call; round-off at the parallel/antiparallel
    /// extremes can push it just outside [-1, 1].
    pub fn elevation_deg(&self, position_km: [f64; 3]) -> f64 {
        let [sx, sy, sz] = self.position_km;
        let dx = position_km[0] - sx;
        let dy = position_km[1] - sy;
        let dz = position_km[2] - sz;
        let range_km = (dx * dx + dy * dy + dz * dz).sqrt();
        if range_km == 0.0 {
            return 0.0;
        }

        let dot = dx * sx + dy * sy + dz * sz;
        let ratio = (dot / (range_km * self.magnitude_km)).clamp(-1.0, 1.0);
        ratio.asin().to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn altitude_is_radius_minus_earth_radius() {
        let positions = [
            [EARTH_RADIUS_KM + 400.0, 0.0, 0.0],
            [1234.5, -6789.0, 2468.0],
            [0.0, 0.0, 42164.0],
        ];
        for p in positions {
            let norm = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            let geo = geodetic(p);
            assert!((geo.altitude_km - (norm - EARTH_RADIUS_KM)).abs() < TOLERANCE);
        }
    }

    #[test]
    fn equatorial_position_has_zero_latitude() {
        let geo = geodetic([EARTH_RADIUS_KM + 500.0, 0.0, 0.0]);
        assert!(geo.latitude_deg.abs() < TOLERANCE);
        assert!(geo.longitude_deg.abs() < TOLERANCE);
    }

    #[test]
    fn polar_position_has_ninety_latitude() {
        let geo = geodetic([0.0, 0.0, EARTH_RADIUS_KM + 500.0]);
        assert!((geo.latitude_deg - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn zero_vector_does_not_panic() {
        let geo = geodetic([0.0, 0.0, 0.0]);
        assert!((geo.altitude_km + EARTH_RADIUS_KM).abs() < TOLERANCE);
        assert!(geo.latitude_deg.is_finite());
        assert!(geo.longitude_deg.is_finite());
    }

    #[test]
    fn satellite_directly_overhead_is_near_ninety_degrees() {
        // Station at the equator/prime-meridian intersection, satellite
        // 400 km straight up.
        let station = Station::new(0.0, 0.0, 0.0);
        let elevation = station.elevation_deg([EARTH_RADIUS_KM + 400.0, 0.0, 0.0]);
        assert!((elevation - 90.0).abs() < 1e-6, "elevation = {elevation}");
    }

    #[test]
    fn satellite_below_station_is_negative() {
        let station = Station::new(0.0, 0.0, 0.0);
        let elevation = station.elevation_deg([-(EARTH_RADIUS_KM + 400.0), 0.0, 0.0]);
        assert!(elevation < 0.0);
    }

    #[test]
    fn elevation_stays_in_range() {
        let station = Station::new(0.7, -1.2, 0.5);
        let positions = [
            [7000.0, 0.0, 0.0],
            [0.0, 7000.0, 0.0],
            [0.0, 0.0, 7000.0],
            [-7000.0, 100.0, -300.0],
            [4000.0, 4000.0, 4000.0],
            [1.0, 1.0, 1.0],
        ];
        for p in positions {
            let elevation = station.elevation_deg(p);
            assert!((-90.0..=90.0).contains(&elevation), "elevation = {elevation}");
        }
    }

    #[test]
    fn antiparallel_extreme_is_clamped_not_nan() {
        // Exactly along the station vector, both directions; the asin
        // argument lands on the domain boundary.
        let station = Station::new(0.3, 0.9, 0.0);
        let up = station.elevation_deg([
            2.0 * EARTH_RADIUS_KM * 0.3f64.cos() * 0.9f64.cos(),
            2.0 * EARTH_RADIUS_KM * 0.3f64.cos() * 0.9f64.sin(),
            2.0 * EARTH_RADIUS_KM * 0.3f64.sin(),
        ]);
        assert!(up.is_finite());
        assert!((up - 90.0).abs() < 1e-6);
    }

    #[test]
    fn station_altitude_scales_the_divisor() {
        // A station above sea level must use its true vector magnitude,
        // not the bare Earth radius.
        let sea_level = Station::new(0.0, 0.0, 0.0);
        let mountain = Station::new(0.0, 0.0, 4.0);
        let p = [EARTH_RADIUS_KM + 400.0, 2000.0, 0.0];
        let a = sea_level.elevation_deg(p);
        let b = mountain.elevation_deg(p);
        assert!(a.is_finite() && b.is_finite());
        assert_ne!(a, b);
    }
}
