//! Two-point pixel-to-distance calibration.

use nalgebra::{Point2, distance};
use thiserror::Error;
use tracing::info;

/// Errors raised while committing a calibration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalibrationError {
    /// The two selected points coincide, so no scale can be derived.
    #[error("calibration points coincide, cannot derive a scale factor")]
    DegenerateCalibration,
}

/// Result of feeding one point into an active calibration session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalibrationProgress {
    /// More points are needed before a scale factor can be computed.
    Pending { collected: usize },
    /// The session committed; the factor is in real-world units per pixel.
    Complete { scale_factor: f64 },
}

/// Converts two user-selected pixel points a known real-world distance apart
/// into a pixels-to-distance scale factor.
///
/// A session collects exactly two points. Once committed, further points are
/// ignored until [`start`](Self::start) resets the session; a degenerate pair
/// leaves the previous scale factor (if any) untouched and also requires a
/// restart.
#[derive(Debug, Clone)]
pub struct CalibrationSession {
    reference_distance: f64,
    points: Vec<Point2<f32>>,
    scale_factor: Option<f64>,
}

impl CalibrationSession {
    /// Create a session for two reference points `reference_distance`
    /// real-world units apart.
    pub fn new(reference_distance: f64) -> Self {
        Self {
            reference_distance,
            points: Vec::with_capacity(2),
            scale_factor: None,
        }
    }

    /// Begin (or restart) point collection, discarding any prior result.
    pub fn start(&mut self) {
        self.points.clear();
        self.scale_factor = None;
    }

    /// Feed one selected pixel point into the session.
    ///
    /// Returns the committed result unchanged once the session is complete.
    pub fn add_point(&mut self, x: f32, y: f32) -> Result<CalibrationProgress, CalibrationError> {
        if let Some(scale_factor) = self.scale_factor {
            return Ok(CalibrationProgress::Complete { scale_factor });
        }

        if self.points.len() < 2 {
            self.points.push(Point2::new(x, y));
        }
        if self.points.len() < 2 {
            return Ok(CalibrationProgress::Pending {
                collected: self.points.len(),
            });
        }

        let pixel_distance = f64::from(distance(&self.points[0], &self.points[1]));
        if pixel_distance == 0.0 {
            return Err(CalibrationError::DegenerateCalibration);
        }

        let scale_factor = self.reference_distance / pixel_distance;
        self.scale_factor = Some(scale_factor);
        info!(scale_factor, "calibration complete");
        Ok(CalibrationProgress::Complete { scale_factor })
    }

    /// The committed scale factor, if the session has completed.
    pub fn scale_factor(&self) -> Option<f64> {
        self.scale_factor
    }

    /// Whether the session has committed a scale factor.
    pub fn is_complete(&self) -> bool {
        self.scale_factor.is_some()
    }
}
