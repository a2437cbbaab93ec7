mod error;
mod propagator;

pub use error::SatelliteError;
pub use propagator::{build_registry, Satellite, StateProvider, StateVector};
