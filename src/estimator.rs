mod calibration;
mod motion_tracker;
mod rect;
mod track;

pub use calibration::{CalibrationError, CalibrationProgress, CalibrationSession};
pub use motion_tracker::{MotionTracker, TrackerConfig};
pub use rect::Rect;
pub use track::{Track, TrackPoint};
