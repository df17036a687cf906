use serde::Serialize;

pub use crate::image::{ImageF32, ImageU8};

/// Thickness hint attached to every valid detection (pixels).
pub const LANE_THICKNESS: f32 = 5.0;

/// Integer pixel coordinate. Values may lie outside the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Which lane boundary a candidate segment supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    Left,
    Right,
    Discarded,
}

/// Two-point approximation of one lane edge.
///
/// `far` sits on the horizon-ward sampling row, `base` on the bottom row of the
/// frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LaneBoundary {
    pub far: Point,
    pub base: Point,
}

impl LaneBoundary {
    pub const fn new(far: Point, base: Point) -> Self {
        Self { far, base }
    }
}

/// Outcome of one frame.
///
/// Either both boundaries are populated and `thickness == LANE_THICKNESS`, or
/// the result is the all-zero "no lanes detected" value. Fields are private so
/// no other state can be constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneResult {
    left: LaneBoundary,
    right: LaneBoundary,
    thickness: f32,
    valid: bool,
}

impl LaneResult {
    /// The "no lanes detected" result: all points at the origin, thickness 0.
    pub const fn invalid() -> Self {
        Self {
            left: LaneBoundary {
                far: Point::ORIGIN,
                base: Point::ORIGIN,
            },
            right: LaneBoundary {
                far: Point::ORIGIN,
                base: Point::ORIGIN,
            },
            thickness: 0.0,
            valid: false,
        }
    }

    pub const fn detected(left: LaneBoundary, right: LaneBoundary) -> Self {
        Self {
            left,
            right,
            thickness: LANE_THICKNESS,
            valid: true,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn left(&self) -> LaneBoundary {
        self.left
    }

    pub fn right(&self) -> LaneBoundary {
        self.right
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Flat point list in host order: right far, right base, left far, left base.
    pub fn coordinates(&self) -> [Point; 4] {
        [
            self.right.far,
            self.right.base,
            self.left.far,
            self.left.base,
        ]
    }

    /// Map the result from a `source` frame size to a `target` view size.
    ///
    /// Coordinates are scaled per axis and truncated; invalid results and
    /// degenerate source sizes map to the invalid result.
    pub fn scaled(
        &self,
        source_w: usize,
        source_h: usize,
        target_w: usize,
        target_h: usize,
    ) -> Self {
        if !self.valid || source_w == 0 || source_h == 0 {
            return Self::invalid();
        }
        let sx = target_w as f32 / source_w as f32;
        let sy = target_h as f32 / source_h as f32;
        let map = |p: Point| Point::new((p.x as f32 * sx) as i32, (p.y as f32 * sy) as i32);
        let map_boundary = |b: LaneBoundary| LaneBoundary::new(map(b.far), map(b.base));
        Self {
            left: map_boundary(self.left),
            right: map_boundary(self.right),
            thickness: self.thickness,
            valid: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LaneResult {
        LaneResult::detected(
            LaneBoundary::new(Point::new(280, 300), Point::new(100, 500)),
            LaneBoundary::new(Point::new(360, 300), Point::new(540, 500)),
        )
    }

    #[test]
    fn invalid_result_is_all_zero() {
        let r = LaneResult::invalid();
        assert!(!r.is_valid());
        assert_eq!(r.thickness(), 0.0);
        assert!(r.coordinates().iter().all(|p| *p == Point::ORIGIN));
        assert_eq!(r, LaneResult::default());
    }

    #[test]
    fn coordinates_follow_host_order() {
        let r = sample();
        assert_eq!(
            r.coordinates(),
            [
                Point::new(360, 300),
                Point::new(540, 500),
                Point::new(280, 300),
                Point::new(100, 500),
            ]
        );
        assert_eq!(r.thickness(), LANE_THICKNESS);
    }

    #[test]
    fn scaling_maps_each_axis() {
        let r = sample().scaled(640, 500, 320, 1000);
        assert!(r.is_valid());
        assert_eq!(r.left().base, Point::new(50, 1000));
        assert_eq!(r.right().far, Point::new(180, 600));
        assert_eq!(r.thickness(), LANE_THICKNESS);
    }

    #[test]
    fn scaling_keeps_invalid_results_invalid() {
        assert!(!LaneResult::invalid().scaled(10, 10, 20, 20).is_valid());
        assert!(!sample().scaled(0, 10, 20, 20).is_valid());
    }
}
