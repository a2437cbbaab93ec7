use chrono::{DateTime, Duration, Utc};

use super::geodesy::Station;
use super::types::{ElevationSample, Pass};
use crate::satellite::StateProvider;

/// Elevation samples at a fixed cadence over `[start, start + horizon)`.
///
/// Instants the propagator cannot serve are skipped entirely; a gap is
/// "no data", not a pass boundary.
pub struct ElevationScan<'a, P: StateProvider> {
    provider: &'a P,
    station: Station,
    cursor: DateTime<Utc>,
    end: DateTime<Utc>,
    step: Duration,
}

impl<'a, P: StateProvider> ElevationScan<'a, P> {
    pub fn new(
        provider: &'a P,
        station: Station,
        start: DateTime<Utc>,
        horizon: Duration,
        step: Duration,
    ) -> Self {
        Self {
            provider,
            station,
            cursor: start,
            end: start + horizon,
            step,
        }
    }
}

impl<P: StateProvider> Iterator for ElevationScan<'_, P> {
    type Item = ElevationSample;

    fn next(&mut self) -> Option<ElevationSample> {
        while self.cursor < self.end {
            let timestamp = self.cursor;
            self.cursor += self.step;
            if let Some(state) = self.provider.state_at(timestamp) {
                return Some(ElevationSample {
                    elevation_deg: self.station.elevation_deg(state.position_km),
                    timestamp,
                });
            }
        }
        None
    }
}

enum DetectorState {
    Idle,
    InPass {
        aos: DateTime<Utc>,
        max_elevation_deg: f64,
    },
}

/// Threshold-crossing detector turning an ordered elevation sequence into
/// completed passes.
///
/// A sample strictly above the threshold opens a pass; a sample at or
/// below it closes one. A sample exactly at the threshold therefore ends
/// a pass and never starts one. An excursion still open when the input
/// runs out yields nothing.
pub struct PassDetector {
    threshold_deg: f64,
    state: DetectorState,
}

impl PassDetector {
    pub fn new(threshold_deg: f64) -> Self {
        Self {
            threshold_deg,
            state: DetectorState::Idle,
        }
    }

    /// Advance by one sample. Returns the completed pass on a downward
    /// crossing, `None` otherwise.
    pub fn feed(&mut self, sample: ElevationSample) -> Option<Pass> {
        match &mut self.state {
            DetectorState::Idle => {
                if sample.elevation_deg > self.threshold_deg {
                    self.state = DetectorState::InPass {
                        aos: sample.timestamp,
                        max_elevation_deg: sample.elevation_deg,
                    };
                }
                None
            }
            DetectorState::InPass {
                aos,
                max_elevation_deg,
            } => {
                if sample.elevation_deg > self.threshold_deg {
                    if sample.elevation_deg > *max_elevation_deg {
                        *max_elevation_deg = sample.elevation_deg;
                    }
                    return None;
                }
                let pass = Pass {
                    aos: *aos,
                    los: sample.timestamp,
                    max_elevation_deg: *max_elevation_deg,
                    duration_sec: (sample.timestamp - *aos).num_seconds(),
                };
                self.state = DetectorState::Idle;
                Some(pass)
            }
        }
    }
}

/// Fold a whole sample sequence into its completed passes.
pub fn detect_passes<I>(samples: I, threshold_deg: f64) -> Vec<Pass>
where
    I: IntoIterator<Item = ElevationSample>,
{
    let mut detector = PassDetector::new(threshold_deg);
    samples
        .into_iter()
        .filter_map(|sample| detector.feed(sample))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap()
    }

    fn samples(elevations: &[f64], step_secs: i64) -> Vec<ElevationSample> {
        elevations
            .iter()
            .enumerate()
            .map(|(i, &elevation_deg)| ElevationSample {
                elevation_deg,
                timestamp: t0() + Duration::seconds(i as i64 * step_secs),
            })
            .collect()
    }

    #[test]
    fn single_excursion_yields_one_pass() {
        let passes = detect_passes(samples(&[2.0, 15.0, 30.0, 15.0, 2.0], 20), 10.0);

        assert_eq!(passes.len(), 1);
        let pass = &passes[0];
        assert_eq!(pass.aos, t0() + Duration::seconds(20));
        assert_eq!(pass.los, t0() + Duration::seconds(80));
        assert_eq!(pass.max_elevation_deg, 30.0);
        assert_eq!(pass.duration_sec, 60);
    }

    #[test]
    fn sample_exactly_at_threshold_never_starts_a_pass() {
        let passes = detect_passes(samples(&[2.0, 10.0, 5.0], 20), 10.0);
        assert!(passes.is_empty());
    }

    #[test]
    fn sample_exactly_at_threshold_ends_a_pass() {
        let passes = detect_passes(samples(&[2.0, 20.0, 10.0, 20.0, 2.0], 20), 10.0);

        // The third sample (exactly 10) closes the first pass, and the
        // fourth opens a second one that closes on the last.
        assert_eq!(passes.len(), 2);
        assert_eq!(passes[0].los, t0() + Duration::seconds(40));
        assert_eq!(passes[1].aos, t0() + Duration::seconds(60));
    }

    #[test]
    fn excursion_open_at_window_end_is_discarded() {
        let passes = detect_passes(samples(&[2.0, 15.0, 30.0, 45.0], 20), 10.0);
        assert!(passes.is_empty());
    }

    #[test]
    fn multiple_passes_emit_in_chronological_order() {
        let passes = detect_passes(
            samples(&[0.0, 12.0, 0.0, 0.0, 25.0, 40.0, 25.0, 0.0, 11.0, 0.0], 20),
            10.0,
        );

        assert_eq!(passes.len(), 3);
        assert!(passes[0].los <= passes[1].aos);
        assert!(passes[1].los <= passes[2].aos);
        assert_eq!(passes[1].max_elevation_deg, 40.0);
        for pass in &passes {
            assert!(pass.los > pass.aos);
            assert!(pass.max_elevation_deg > 10.0);
        }
    }

    #[test]
    fn max_elevation_includes_the_aos_sample() {
        let passes = detect_passes(samples(&[0.0, 35.0, 20.0, 0.0], 20), 10.0);

        assert_eq!(passes.len(), 1);
        assert_eq!(passes[0].max_elevation_deg, 35.0);
    }

    #[test]
    fn duration_is_whole_seconds_between_aos_and_los() {
        let passes = detect_passes(samples(&[0.0, 15.0, 15.0, 15.0, 0.0], 20), 10.0);

        assert_eq!(passes.len(), 1);
        assert_eq!(
            passes[0].duration_sec,
            (passes[0].los - passes[0].aos).num_seconds()
        );
        assert_eq!(passes[0].duration_sec, 60);
    }

    #[test]
    fn all_failing_propagator_yields_no_passes() {
        use crate::satellite::StateVector;

        struct NeverAvailable;

        impl StateProvider for NeverAvailable {
            fn state_at(&self, _epoch: DateTime<Utc>) -> Option<StateVector> {
                None
            }
        }

        let station = Station::new(0.0, 0.0, 0.0);
        let scan = ElevationScan::new(
            &NeverAvailable,
            station,
            t0(),
            Duration::hours(24),
            Duration::seconds(20),
        );
        assert!(detect_passes(scan, 10.0).is_empty());
    }

    #[test]
    fn empty_input_yields_no_passes() {
        let passes = detect_passes(std::iter::empty(), 10.0);
        assert!(passes.is_empty());
    }

    #[test]
    fn detector_resets_after_each_pass() {
        let mut detector = PassDetector::new(0.0);
        let input = samples(&[5.0, -1.0, 5.0, -1.0], 20);

        let emitted: Vec<_> = input
            .into_iter()
            .filter_map(|s| detector.feed(s))
            .collect();
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[0].duration_sec, 20);
        assert_eq!(emitted[1].duration_sec, 20);
    }
}
