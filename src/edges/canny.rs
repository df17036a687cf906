//! Canny edge detector on the L1 Sobel magnitude.
//!
//! Non-maximum suppression compares each pixel against its two neighbours
//! along the gradient direction quantized to 0°, 45°, 90° or 135°. The
//! comparison is strict on the "previous" neighbour and non-strict on the
//! "next" one so that plateaus keep exactly one pixel. Surviving pixels above
//! `high` seed an 8-connected flood through pixels above `low`.
//!
//! The outermost 1-pixel frame never carries an edge.
use super::grad::sobel_gradients;
use super::options::CannyParams;
use crate::image::{EdgeMap, ImageF32, ImageView};

const TAN_22_5_DEG: f32 = 0.414_213_56;
const TAN_67_5_DEG: f32 = 2.414_213_6;

const NOT_EDGE: u8 = 0;
const WEAK: u8 = 1;
const STRONG: u8 = 2;

pub fn canny(image: &ImageF32, params: &CannyParams) -> EdgeMap {
    let (w, h) = (image.w, image.h);
    let mut edges = EdgeMap::new(w, h);
    if w < 3 || h < 3 {
        return edges;
    }
    let (low, high) = if params.low <= params.high {
        (params.low, params.high)
    } else {
        (params.high, params.low)
    };

    let grad = sobel_gradients(image);
    let mut state = vec![NOT_EDGE; w * h];
    let mut stack: Vec<usize> = Vec::new();

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let m = mag_row[x];
            if m <= low {
                continue;
            }
            let gx = gx_row[x];
            let gy = gy_row[x];
            let ax = gx.abs();
            let ay = gy.abs();

            let (before, after) = if ay < ax * TAN_22_5_DEG {
                (mag_row[x - 1], mag_row[x + 1])
            } else if ay > ax * TAN_67_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if (gx < 0.0) != (gy < 0.0) {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            if m > before && m >= after {
                let idx = y * w + x;
                if m > high {
                    state[idx] = STRONG;
                    stack.push(idx);
                } else {
                    state[idx] = WEAK;
                }
            }
        }
    }

    while let Some(idx) = stack.pop() {
        let (x, y) = (idx % w, idx / w);
        edges.mark(x, y);
        for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                let n = ny * w + nx;
                if state[n] == WEAK {
                    state[n] = STRONG;
                    stack.push(n);
                }
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_step(w: usize, h: usize, split: usize, level: f32) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in split..w {
                img.set(x, y, level);
            }
        }
        img
    }

    #[test]
    fn step_edge_is_one_pixel_wide() {
        let img = vertical_step(16, 12, 8, 200.0);
        let edges = canny(&img, &CannyParams::default());
        for y in 1..11 {
            let row: Vec<usize> = (0..16).filter(|&x| edges.is_edge(x, y)).collect();
            assert_eq!(row, vec![7], "row {y}");
        }
        assert!(!edges.is_edge(7, 0));
    }

    #[test]
    fn weak_step_is_rejected() {
        // Sobel L1 magnitude 4 * 30 = 120 < high
        let img = vertical_step(16, 12, 8, 30.0);
        let edges = canny(&img, &CannyParams::default());
        assert_eq!(edges.count(), 0);
    }

    #[test]
    fn weak_pixels_attached_to_strong_ones_survive() {
        // Left half of the step is strong, right half weak but connected.
        let mut img = ImageF32::new(20, 12);
        for y in 0..12 {
            let level = if y < 6 { 200.0 } else { 30.0 };
            for x in 10..20 {
                img.set(x, y, level);
            }
        }
        let edges = canny(&img, &CannyParams::default());
        assert!(edges.is_edge(9, 2));
        assert!(edges.is_edge(9, 8));
    }

    #[test]
    fn flat_and_tiny_images_have_no_edges() {
        let mut flat = ImageF32::new(10, 10);
        flat.data.iter_mut().for_each(|v| *v = 77.0);
        assert_eq!(canny(&flat, &CannyParams::default()).count(), 0);
        assert_eq!(canny(&ImageF32::new(2, 2), &CannyParams::default()).count(), 0);
    }
}
