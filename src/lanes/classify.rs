//! Slope-gated partition of raw segments into left/right lane candidates.
use super::{SLOPE_GATE_MAX, SLOPE_GATE_MIN};
use crate::segments::RawSegment;
use crate::types::{Point, Side};
use log::trace;
use serde::Serialize;

/// A raw segment annotated with slope, midpoint and side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassifiedSegment {
    pub slope: f32,
    pub midpoint: Point,
    pub side: Side,
}

/// Candidates for both sides of one frame, in input order.
#[derive(Clone, Debug, Default)]
pub struct Candidates {
    pub left: Vec<ClassifiedSegment>,
    pub right: Vec<ClassifiedSegment>,
    pub discarded: usize,
}

impl Candidates {
    /// Number of raw segments that went into the classifier.
    pub fn total(&self) -> usize {
        self.left.len() + self.right.len() + self.discarded
    }
}

/// Side selected by the slope gate.
///
/// The comparison runs in `f64` against the `f64` gate constants. Vertical
/// segments (±inf) and zero-length segments (NaN) fall outside both intervals.
pub fn side_for_slope(slope: f32) -> Side {
    let s = f64::from(slope);
    if s > SLOPE_GATE_MIN && s < SLOPE_GATE_MAX {
        Side::Right
    } else if s < -SLOPE_GATE_MIN && s > -SLOPE_GATE_MAX {
        Side::Left
    } else {
        Side::Discarded
    }
}

pub fn classify_segment(segment: &RawSegment) -> ClassifiedSegment {
    let slope = segment.slope();
    ClassifiedSegment {
        slope,
        midpoint: segment.midpoint(),
        side: side_for_slope(slope),
    }
}

/// Partition `segments` into left and right candidates, dropping the rest.
pub fn classify_segments<I>(segments: I) -> Candidates
where
    I: IntoIterator<Item = RawSegment>,
{
    let mut out = Candidates::default();
    for segment in segments {
        let classified = classify_segment(&segment);
        trace!(
            "segment {:?} slope={} side={:?}",
            segment,
            classified.slope,
            classified.side
        );
        match classified.side {
            Side::Left => out.left.push(classified),
            Side::Right => out.right.push(classified),
            Side::Discarded => out.discarded += 1,
        }
    }
    out
}
