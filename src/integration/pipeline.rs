//! SpeedPipeline for combining identified detection with speed estimation.

use crate::estimator::{MotionTracker, Rect, TrackerConfig};
use crate::integration::report::{SpeedRecord, SpeedReport};

use super::DetectionSource;

/// One pipeline result per observation, ready for presentation.
#[derive(Debug, Clone, Copy)]
pub struct TrackedSpeed {
    /// Tracked object identity
    pub id: u64,
    /// Bounding box from the detector
    pub bbox: Rect,
    /// Smoothed speed in distance units per hour
    pub speed: f64,
    /// Whether the speed meets or exceeds the configured limit
    pub speeding: bool,
}

/// A combined estimator that bundles identified detection with speed
/// estimation and report accumulation.
///
/// This struct provides a convenient way to run end-to-end speed analysis
/// by combining any `DetectionSource` with the `MotionTracker`.
pub struct SpeedPipeline<D: DetectionSource> {
    detector: D,
    tracker: MotionTracker<u64>,
    report: SpeedReport,
}

impl<D: DetectionSource> SpeedPipeline<D> {
    /// Create a new pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> Self {
        Self {
            detector,
            tracker: MotionTracker::new(config),
            report: SpeedReport::new(),
        }
    }

    /// Create a new pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self::new(detector, TrackerConfig::default())
    }

    /// Process a single frame and return per-object speeds.
    ///
    /// Runs detection on the input image, then updates the tracker once per
    /// observation. All observations of a frame share the given timestamp
    /// and form one logical batch; their relative order does not matter
    /// since identities never share state. Each observation also appends a
    /// record to the accumulated report.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `timestamp` - Frame timestamp in seconds from a monotonic clock
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
        timestamp: f64,
    ) -> Result<Vec<TrackedSpeed>, D::Error> {
        let observations = self.detector.detect(input, width, height)?;
        let mut results = Vec::with_capacity(observations.len());

        for obs in observations {
            let speed = self.tracker.update(obs.id, obs.bbox, timestamp);
            self.report.push(SpeedRecord {
                id: obs.id,
                speed,
                timestamp,
            });
            results.push(TrackedSpeed {
                id: obs.id,
                bbox: obs.bbox,
                speed,
                speeding: self.tracker.exceeds_limit(speed),
            });
        }

        Ok(results)
    }

    /// Forward a completed calibration to the tracker.
    pub fn apply_calibration(&mut self, scale_factor: f64) {
        self.tracker.set_scale_factor(scale_factor);
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &MotionTracker<u64> {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut MotionTracker<u64> {
        &mut self.tracker
    }

    /// Get a reference to the accumulated report.
    pub fn report(&self) -> &SpeedReport {
        &self.report
    }

    /// Get a mutable reference to the accumulated report.
    pub fn report_mut(&mut self) -> &mut SpeedReport {
        &mut self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::Observation;

    struct MockDetector {
        observations: Vec<Observation>,
    }

    impl DetectionSource for MockDetector {
        type Error = std::convert::Infallible;

        fn detect(
            &mut self,
            _input: &[u8],
            _width: u32,
            _height: u32,
        ) -> Result<Vec<Observation>, Self::Error> {
            Ok(self.observations.clone())
        }
    }

    #[test]
    fn test_pipeline_first_frame_zero_speed() {
        let detector = MockDetector {
            observations: vec![Observation::new(1, 10.0, 20.0, 50.0, 80.0)],
        };

        let mut pipeline = SpeedPipeline::with_default_config(detector);
        let results = pipeline.process_frame(&[], 640, 480, 0.0).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
        assert_eq!(results[0].speed, 0.0);
        assert!(!results[0].speeding);
        assert_eq!(pipeline.report().len(), 1);
    }

    #[test]
    fn test_pipeline_accumulates_records_per_observation() {
        let detector = MockDetector {
            observations: vec![
                Observation::new(1, 0.0, 0.0, 10.0, 10.0),
                Observation::new(2, 100.0, 0.0, 110.0, 10.0),
            ],
        };

        let mut pipeline = SpeedPipeline::with_default_config(detector);
        pipeline.process_frame(&[], 640, 480, 0.0).unwrap();
        pipeline.process_frame(&[], 640, 480, 1.0).unwrap();

        assert_eq!(pipeline.report().len(), 4);
        assert_eq!(pipeline.tracker().len(), 2);
    }
}
