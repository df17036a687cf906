//! Reduction of one side's candidates to a representative slope and point.
use super::classify::ClassifiedSegment;
use crate::types::Point;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideAggregate {
    pub mean_slope: f32,
    pub centroid: Point,
}

/// Mean slope and midpoint centroid, or `None` for an empty side.
///
/// Slopes are summed in input order in `f32`; the centroid uses truncating
/// integer division.
pub fn aggregate(candidates: &[ClassifiedSegment]) -> Option<SideAggregate> {
    if candidates.is_empty() {
        return None;
    }
    let n = candidates.len();
    let slope_sum = candidates.iter().fold(0.0f32, |acc, c| acc + c.slope);
    let (sum_x, sum_y) = candidates.iter().fold((0i64, 0i64), |(sx, sy), c| {
        (sx + i64::from(c.midpoint.x), sy + i64::from(c.midpoint.y))
    });
    Some(SideAggregate {
        mean_slope: slope_sum / n as f32,
        centroid: Point::new((sum_x / n as i64) as i32, (sum_y / n as i64) as i32),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn candidate(slope: f32, x: i32, y: i32) -> ClassifiedSegment {
        ClassifiedSegment {
            slope,
            midpoint: Point::new(x, y),
            side: Side::Right,
        }
    }

    #[test]
    fn empty_side_has_no_aggregate() {
        assert_eq!(aggregate(&[]), None);
    }

    #[test]
    fn mean_and_centroid() {
        let agg = aggregate(&[
            candidate(0.25, 10, 20),
            candidate(0.75, 21, 41),
            candidate(0.5, 30, 60),
        ])
        .expect("non-empty side");
        assert_eq!(agg.mean_slope, 0.5);
        // (61 / 3, 121 / 3) truncated
        assert_eq!(agg.centroid, Point::new(20, 40));
    }
}
