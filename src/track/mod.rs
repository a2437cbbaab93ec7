mod geodesy;
mod ground_track;
mod passes;
mod types;

pub use geodesy::{geodetic, Geodetic, Station, EARTH_RADIUS_KM};
pub use ground_track::GroundTrack;
pub use passes::{detect_passes, ElevationScan, PassDetector};
pub use types::{ElevationSample, GeodeticFix, Pass};
