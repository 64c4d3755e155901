//! Per-identity track state for speed estimation.

use std::collections::VecDeque;

use nalgebra::Point2;

/// Number of history entries kept per track. Speed is computed from the
/// most recent entry only, so a two-entry window is sufficient.
const MAX_HISTORY: usize = 2;

/// A single recorded observation of a tracked object.
#[derive(Debug, Clone, Copy)]
pub struct TrackPoint {
    /// Centroid position in pixel space
    pub position: Point2<f32>,
    /// Monotonic timestamp in seconds
    pub timestamp: f64,
}

/// Trajectory state for one tracked identity.
///
/// Holds a fixed window of recent (position, timestamp) observations and the
/// exponentially smoothed speed estimate. Storing both halves of an
/// observation in one entry keeps the position and timestamp sequences in
/// lockstep by construction.
#[derive(Debug, Clone)]
pub struct Track {
    history: VecDeque<TrackPoint>,
    filtered_speed: f64,
}

impl Track {
    /// Create a track from its first observation. The smoothed speed starts
    /// at zero until a second observation arrives.
    pub fn new(position: Point2<f32>, timestamp: f64) -> Self {
        let mut history = VecDeque::with_capacity(MAX_HISTORY);
        history.push_back(TrackPoint {
            position,
            timestamp,
        });
        Self {
            history,
            filtered_speed: 0.0,
        }
    }

    /// The most recent recorded observation.
    pub fn last(&self) -> &TrackPoint {
        // History holds at least one entry from construction onward.
        self.history
            .back()
            .expect("track history is never empty")
    }

    /// Current smoothed speed estimate in distance units per hour.
    pub fn filtered_speed(&self) -> f64 {
        self.filtered_speed
    }

    /// Number of observations currently retained.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Record a new observation and commit the given smoothed speed.
    pub(crate) fn record(&mut self, position: Point2<f32>, timestamp: f64, filtered_speed: f64) {
        if self.history.len() == MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(TrackPoint {
            position,
            timestamp,
        });
        self.filtered_speed = filtered_speed;
    }
}
