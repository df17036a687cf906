#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod frame;
pub mod image;
pub mod lanes;
pub mod types;

// Building blocks of the built-in segment source.
pub mod edges;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{LaneDetector, LaneParams};
pub use crate::frame::{Frame, FrameError};
pub use crate::types::{LaneBoundary, LaneResult, Point};

// Lane stage usable with segments from any line detector.
pub use crate::lanes::extract_lanes;
pub use crate::segments::{RawSegment, SegmentSource};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::DetectionReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_detector::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
///
/// let det = LaneDetector::new(LaneParams::default());
/// let res = det.recognize(Frame::gray(&gray, w, h));
/// println!("valid={} points={:?}", res.is_valid(), res.coordinates());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{Frame, LaneDetector, LaneParams, LaneResult, RawSegment, SegmentSource};
}
