//! Lane-line extraction from raw line segments.
//!
//! Overview
//! - [`classify`]: slope gate splitting segments into left/right candidates.
//!   In image coordinates (y grows downward) the right lane marking rises
//!   towards the horizon with a positive slope, the left one with a negative
//!   slope. Near-horizontal and near-vertical segments are dropped.
//! - [`aggregate`]: mean slope and midpoint centroid per side. An empty side
//!   yields `None`.
//! - [`extrapolate`]: the line through the centroid with the mean slope is
//!   sampled at the bottom row and at 3/5 of the frame height.
//!
//! The stage is pure: the same segments always give the same [`LaneResult`].
//! It accepts any `IntoIterator<Item = RawSegment>`, so segments may come
//! from the built-in extractor or from any other line detector.

pub mod aggregate;
pub mod classify;
pub mod extrapolate;

pub use aggregate::{aggregate, SideAggregate};
pub use classify::{classify_segment, classify_segments, side_for_slope, Candidates, ClassifiedSegment};
pub use extrapolate::{column_at_row, extrapolate, far_row};

use crate::segments::RawSegment;
use crate::types::LaneResult;
use log::{debug, warn};

/// Lower bound (exclusive) on |slope| for a lane candidate.
pub const SLOPE_GATE_MIN: f64 = 0.01;
/// Upper bound (exclusive) on |slope| for a lane candidate.
pub const SLOPE_GATE_MAX: f64 = 1.0;
/// The far sampling row is `frame_height * FAR_ROW_NUMERATOR / FAR_ROW_DENOMINATOR`.
pub const FAR_ROW_NUMERATOR: i32 = 3;
pub const FAR_ROW_DENOMINATOR: i32 = 5;

/// Intermediate products of one lane extraction, kept for diagnostics.
#[derive(Clone, Debug)]
pub struct LaneAnalysis {
    pub candidates: Candidates,
    pub left: Option<SideAggregate>,
    pub right: Option<SideAggregate>,
    pub result: LaneResult,
}

/// Classify, aggregate and extrapolate `segments` for a frame of `frame_height` rows.
pub fn analyze_segments<I>(segments: I, frame_height: usize) -> LaneAnalysis
where
    I: IntoIterator<Item = RawSegment>,
{
    let candidates = classify_segments(segments);
    let left = aggregate(&candidates.left);
    let right = aggregate(&candidates.right);

    let result = match (candidates.total(), left, right) {
        (0, _, _) => {
            debug!("lanes: no segments");
            LaneResult::invalid()
        }
        (_, Some(l), Some(r)) => {
            let boundaries = i32::try_from(frame_height)
                .ok()
                .and_then(|h| Some((extrapolate(&l, h)?, extrapolate(&r, h)?)));
            match boundaries {
                Some((left, right)) => LaneResult::detected(left, right),
                None => {
                    warn!("lanes: boundaries out of range for frame height {frame_height}");
                    LaneResult::invalid()
                }
            }
        }
        (total, l, r) => {
            debug!(
                "lanes: one side empty (segments={} left={} right={})",
                total,
                l.is_some(),
                r.is_some()
            );
            LaneResult::invalid()
        }
    };

    debug!(
        "lanes: left={} right={} discarded={} valid={}",
        candidates.left.len(),
        candidates.right.len(),
        candidates.discarded,
        result.is_valid()
    );

    LaneAnalysis {
        candidates,
        left,
        right,
        result,
    }
}

/// Lane boundaries for one frame; the invalid result when either side is empty.
pub fn extract_lanes<I>(segments: I, frame_height: usize) -> LaneResult
where
    I: IntoIterator<Item = RawSegment>,
{
    analyze_segments(segments, frame_height).result
}
