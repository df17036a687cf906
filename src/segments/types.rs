use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Line segment between `(x0, y0)` and `(x1, y1)` in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawSegment {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl RawSegment {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// `dy / dx` in `f32`; ±inf for vertical and NaN for zero-length segments.
    pub fn slope(&self) -> f32 {
        let dy = i64::from(self.y1) - i64::from(self.y0);
        let dx = i64::from(self.x1) - i64::from(self.x0);
        dy as f32 / dx as f32
    }

    /// Endpoint average with truncating integer division.
    pub fn midpoint(&self) -> Point {
        // the mean of two i32 values always fits in i32
        let mid = |a: i32, b: i32| ((i64::from(a) + i64::from(b)) / 2) as i32;
        Point::new(mid(self.x0, self.x1), mid(self.y0, self.y1))
    }
}

impl From<[i32; 4]> for RawSegment {
    fn from(v: [i32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<(i32, i32, i32, i32)> for RawSegment {
    fn from((x0, y0, x1, y1): (i32, i32, i32, i32)) -> Self {
        Self::new(x0, y0, x1, y1)
    }
}
