//! Calibrated real-world speed estimation for tracked object detections.
//!
//! Given a stream of per-frame observations (identity, bounding box,
//! timestamp) from an external detector with persistent identities, the
//! [`MotionTracker`] maintains per-object trajectory state and returns an
//! exponentially smoothed speed in real-world units per hour. The
//! [`CalibrationSession`] derives the pixel-to-distance scale factor from
//! two user-selected points a known distance apart.

pub mod estimator;
pub mod integration;

pub use estimator::{
    CalibrationError, CalibrationProgress, CalibrationSession, MotionTracker, Rect, Track,
    TrackerConfig,
};
pub use integration::{
    DetectionSource, Observation, ObservationBuilder, SpeedPipeline, SpeedRecord, SpeedReport,
    TrackedSpeed,
};
