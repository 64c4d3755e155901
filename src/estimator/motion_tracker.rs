//! Main speed estimation algorithm over identified detections.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use nalgebra::{Point2, distance};
use tracing::debug;

use crate::estimator::rect::Rect;
use crate::estimator::track::Track;

/// Conversion from distance units per second to distance units per hour,
/// assuming the scale factor is expressed in meters per pixel (m/s -> km/h).
const SECONDS_TO_HOURS: f64 = 3.6;

/// Configuration for the MotionTracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Real-world distance units represented by one pixel
    pub scale_factor: f64,
    /// Weight given to the newest instantaneous speed sample, in (0, 1)
    pub smoothing_alpha: f64,
    /// Classification threshold in distance units per hour
    pub speed_limit: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            // Placeholder until calibration supplies a measured value.
            scale_factor: 0.1,
            smoothing_alpha: 0.7,
            speed_limit: 60.0,
        }
    }
}

/// Estimates per-object speed from a stream of identified bounding boxes.
///
/// Each identity owns an independent [`Track`]; updates for different
/// identities never interact, so a parallel host may partition identities
/// across workers without shared locking.
pub struct MotionTracker<K = u64> {
    tracks: HashMap<K, Track>,
    config: TrackerConfig,
}

impl<K> MotionTracker<K>
where
    K: Eq + Hash + std::fmt::Debug,
{
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            tracks: HashMap::new(),
            config,
        }
    }

    /// Process one observation and return the smoothed speed for that
    /// identity, rounded to one decimal place.
    ///
    /// The first observation of an identity creates its track and returns
    /// `0.0`. An observation with the same timestamp as the previous one
    /// returns the existing estimate without extending the history, which
    /// also guards the elapsed-time division. Inputs are trusted: NaN
    /// coordinates or timestamps propagate into the result.
    pub fn update(&mut self, identity: K, bbox: Rect, timestamp: f64) -> f64 {
        let (cx, cy) = bbox.center();
        let centroid = Point2::new(cx, cy);

        let track = match self.tracks.entry(identity) {
            Entry::Vacant(entry) => {
                debug!(identity = ?entry.key(), timestamp, "new track");
                entry.insert(Track::new(centroid, timestamp));
                return 0.0;
            }
            Entry::Occupied(entry) => entry.into_mut(),
        };

        let prev = *track.last();
        let elapsed = timestamp - prev.timestamp;
        if elapsed == 0.0 {
            return round_tenth(track.filtered_speed());
        }

        let pixel_distance = f64::from(distance(&centroid, &prev.position));
        let real_distance = pixel_distance * self.config.scale_factor;
        let instantaneous = (real_distance / elapsed) * SECONDS_TO_HOURS;

        let alpha = self.config.smoothing_alpha;
        let filtered = alpha * instantaneous + (1.0 - alpha) * track.filtered_speed();

        track.record(centroid, timestamp, filtered);
        round_tenth(filtered)
    }

    /// Apply a calibration result to all subsequent speed computations.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.config.scale_factor = scale_factor;
    }

    /// Whether a reported speed exceeds the configured limit.
    pub fn exceeds_limit(&self, speed: f64) -> bool {
        speed >= self.config.speed_limit
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Look up the track state for an identity, if it has been observed.
    pub fn track(&self, identity: &K) -> Option<&Track> {
        self.tracks.get(identity)
    }

    /// Drop the track for an identity the detector no longer reports.
    ///
    /// The tracker itself never evicts; stale-identity cleanup is the
    /// caller's decision.
    pub fn remove(&mut self, identity: &K) -> Option<Track> {
        self.tracks.remove(identity)
    }

    /// Number of identities currently tracked.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Discard all track state, keeping the configuration.
    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}

impl<K> Default for MotionTracker<K>
where
    K: Eq + Hash + std::fmt::Debug,
{
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

#[inline]
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
