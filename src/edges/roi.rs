//! Trapezoidal road region of interest.
use super::options::RoiParams;
use crate::image::EdgeMap;
use serde::Serialize;

/// Trapezoid with its base on the bottom image border and a narrow top edge
/// near the expected vanishing point. Vertices are whole pixels, truncated
/// from the fractional parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiTrapezoid {
    pub bottom_left: (i32, i32),
    pub top_left: (i32, i32),
    pub top_right: (i32, i32),
    pub bottom_right: (i32, i32),
}

impl RoiTrapezoid {
    pub fn for_frame(width: usize, height: usize, params: &RoiParams) -> Self {
        let (w, h) = (width as f32, height as f32);
        let top = (h * params.apex_height) as i32;
        Self {
            bottom_left: (0, height as i32),
            top_left: ((w * params.apex_left) as i32, top),
            top_right: ((w * params.apex_right) as i32, top),
            bottom_right: (width as i32, height as i32),
        }
    }

    /// Inclusive horizontal span covered on row `y`, if any.
    pub fn span(&self, y: i32) -> Option<(f32, f32)> {
        let bottom = self.bottom_left.1;
        let top = self.top_left.1;
        if y < top || y > bottom {
            return None;
        }
        if bottom == top {
            let lo = self.bottom_left.0.min(self.top_left.0) as f32;
            let hi = self.bottom_right.0.max(self.top_right.0) as f32;
            return Some((lo, hi));
        }
        let t = (bottom - y) as f32 / (bottom - top) as f32;
        let lerp = |a: (i32, i32), b: (i32, i32)| a.0 as f32 + t * (b.0 - a.0) as f32;
        Some((
            lerp(self.bottom_left, self.top_left),
            lerp(self.bottom_right, self.top_right),
        ))
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.span(y)
            .is_some_and(|(lo, hi)| x as f32 >= lo && x as f32 <= hi)
    }

    /// Clear every edge pixel outside the trapezoid; returns the pixels kept.
    pub fn apply(&self, edges: &mut EdgeMap) -> usize {
        let mut kept = 0usize;
        for y in 0..edges.h {
            for x in 0..edges.w {
                if !edges.is_edge(x, y) {
                    continue;
                }
                if self.contains(x as i32, y as i32) {
                    kept += 1;
                } else {
                    edges.clear(x, y);
                }
            }
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_trapezoid_vertices() {
        let roi = RoiTrapezoid::for_frame(640, 480, &RoiParams::default());
        assert_eq!(roi.bottom_left, (0, 480));
        assert_eq!(roi.top_left, (307, 278));
        assert_eq!(roi.top_right, (332, 278));
        assert_eq!(roi.bottom_right, (640, 480));
    }

    #[test]
    fn containment_narrows_towards_the_top() {
        let roi = RoiTrapezoid::for_frame(640, 480, &RoiParams::default());
        assert!(roi.contains(5, 479));
        assert!(roi.contains(635, 479));
        assert!(roi.contains(320, 280));
        assert!(!roi.contains(100, 280));
        assert!(!roi.contains(320, 200));
        assert!(!roi.contains(5, 300));
    }

    #[test]
    fn apply_clears_outside_pixels() {
        let roi = RoiTrapezoid::for_frame(100, 100, &RoiParams::default());
        let mut edges = EdgeMap::new(100, 100);
        edges.mark(50, 90);
        edges.mark(2, 10);
        edges.mark(98, 70);
        let kept = roi.apply(&mut edges);
        assert_eq!(kept, 1);
        assert!(edges.is_edge(50, 90));
        assert!(!edges.is_edge(2, 10));
        assert!(!edges.is_edge(98, 70));
    }
}
