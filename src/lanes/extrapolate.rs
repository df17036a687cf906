//! Line extrapolation from a side aggregate to the two sampling rows.
use super::aggregate::SideAggregate;
use super::{FAR_ROW_DENOMINATOR, FAR_ROW_NUMERATOR};
use crate::types::{LaneBoundary, Point};

/// Horizon-ward sampling row: `frame_height * 3 / 5` in integer arithmetic.
#[inline]
pub fn far_row(frame_height: i32) -> i32 {
    let row = i64::from(frame_height) * i64::from(FAR_ROW_NUMERATOR)
        / i64::from(FAR_ROW_DENOMINATOR);
    // |h * 3 / 5| <= |h|
    row as i32
}

/// Column where the line through `centroid` with `mean_slope` crosses row `y`.
///
/// Evaluated in `f32` and truncated toward zero. No clamping to the frame;
/// `None` when the column does not fit in `i32` or is not finite.
#[inline]
pub fn column_at_row(aggregate: &SideAggregate, y: i32) -> Option<i32> {
    let c = aggregate.centroid;
    let dy = i64::from(y) - i64::from(c.y);
    let x = (dy as f32 / aggregate.mean_slope + c.x as f32).trunc();
    // NaN fails both comparisons
    (x >= i32::MIN as f32 && x < i32::MAX as f32).then_some(x as i32)
}

/// Boundary sampled at the far row and at the bottom row (`frame_height`).
pub fn extrapolate(aggregate: &SideAggregate, frame_height: i32) -> Option<LaneBoundary> {
    let y_far = far_row(frame_height);
    let y_base = frame_height;
    Some(LaneBoundary::new(
        Point::new(column_at_row(aggregate, y_far)?, y_far),
        Point::new(column_at_row(aggregate, y_base)?, y_base),
    ))
}
