//! Trait for detection-with-identity inference backends.

use crate::estimator::Rect;

/// A single identified detection for one frame.
///
/// Identities are assigned upstream and are stable across frames for the
/// same physical object; this crate treats them as opaque keys.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    /// Stable external object identifier
    pub id: u64,
    /// Bounding box in pixel space
    pub bbox: Rect,
}

impl Observation {
    /// Create an observation from an identity and a TLBR bounding box.
    pub fn new(id: u64, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            id,
            bbox: Rect::from_tlbr(x1, y1, x2, y2),
        }
    }

    pub fn from_rect(id: u64, bbox: Rect) -> Self {
        Self { id, bbox }
    }
}

/// Trait for detection backends that assign persistent identities.
///
/// Implement this trait to connect any detector-plus-tracker model to the
/// speed estimation pipeline.
///
/// # Example
///
/// ```ignore
/// use speedtrack_rs::{DetectionSource, Observation};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<Observation>, Self::Error> {
///         // Run inference and return identified detections
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data and return identified detections.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Observation>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `Observation`.
pub trait IntoObservations {
    /// Convert the output into a vector of observations.
    fn into_observations(self) -> Vec<Observation>;
}

impl IntoObservations for Vec<Observation> {
    fn into_observations(self) -> Vec<Observation> {
        self
    }
}
