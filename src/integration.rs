//! Integration module for connecting detection backends with speed estimation.
//!
//! This module provides traits and utilities for feeding identified
//! detections from any inference backend into the motion tracker, and for
//! accumulating the resulting measurements into an exportable report.

mod builder;
mod detector;
mod pipeline;
mod report;

pub use builder::ObservationBuilder;
pub use detector::{DetectionSource, IntoObservations, Observation};
pub use pipeline::{SpeedPipeline, TrackedSpeed};
pub use report::{ReportError, SpeedRecord, SpeedReport};
