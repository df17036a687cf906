use super::options::HoughParams;
use super::RawSegment;
use crate::image::EdgeMap;
use log::{debug, warn};
use rand::Rng;

/// Fixed-point shift used while stepping along a line.
const SHIFT: i32 = 16;

struct Accumulator {
    /// `(cos θ / rho, sin θ / rho)` per angle bin
    trig: Vec<(f32, f32)>,
    num_rho: usize,
    rho_offset: i32,
    votes: Vec<i32>,
}

impl Accumulator {
    fn new(width: i32, height: i32, rho: f32, theta: f32) -> Self {
        let num_angle = ((std::f32::consts::PI / theta).round_ties_even() as usize).max(1);
        let num_rho = ((((width + height) * 2 + 1) as f32 / rho).round_ties_even() as usize).max(1);
        let irho = 1.0 / rho;
        let trig = (0..num_angle)
            .map(|n| {
                let angle = n as f32 * theta;
                (angle.cos() * irho, angle.sin() * irho)
            })
            .collect();
        Self {
            trig,
            num_rho,
            rho_offset: (num_rho as i32 - 1) / 2,
            votes: vec![0; num_angle * num_rho],
        }
    }

    /// Accumulator index of `(x, y)` at angle bin `n`; `None` when a coarse
    /// `rho` rounds outside the distance range.
    #[inline]
    fn cell(&self, n: usize, x: i32, y: i32) -> Option<usize> {
        let (c, s) = self.trig[n];
        let r = (x as f32 * c + y as f32 * s).round_ties_even() as i32 + self.rho_offset;
        let r = usize::try_from(r).ok().filter(|&r| r < self.num_rho)?;
        Some(n * self.num_rho + r)
    }

    /// Add the votes of `(x, y)`; returns the best bin and its count.
    fn vote(&mut self, x: i32, y: i32) -> (usize, i32) {
        let mut best = (0usize, i32::MIN);
        for n in 0..self.trig.len() {
            let Some(idx) = self.cell(n, x, y) else {
                continue;
            };
            self.votes[idx] += 1;
            if self.votes[idx] > best.1 {
                best = (n, self.votes[idx]);
            }
        }
        best
    }

    fn withdraw(&mut self, x: i32, y: i32) {
        for n in 0..self.trig.len() {
            if let Some(idx) = self.cell(n, x, y) {
                self.votes[idx] -= 1;
            }
        }
    }
}

/// Stepping state along one accepted line direction.
#[derive(Clone, Copy)]
struct Walker {
    /// When set, `x` advances by whole pixels and `y` is fixed-point.
    x_major: bool,
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
}

impl Walker {
    fn new(px: i32, py: i32, cos_n: f32, sin_n: f32) -> Self {
        let a = -sin_n;
        let b = cos_n;
        let one = (1i32 << SHIFT) as f32;
        let half = 1i32 << (SHIFT - 1);
        if a.abs() > b.abs() {
            Self {
                x_major: true,
                x: px,
                y: (py << SHIFT) + half,
                dx: if a > 0.0 { 1 } else { -1 },
                dy: (b * one / a.abs()).round_ties_even() as i32,
            }
        } else {
            Self {
                x_major: false,
                x: (px << SHIFT) + half,
                y: py,
                dx: (a * one / b.abs()).round_ties_even() as i32,
                dy: if b > 0.0 { 1 } else { -1 },
            }
        }
    }

    fn reversed(mut self) -> Self {
        self.dx = -self.dx;
        self.dy = -self.dy;
        self
    }

    #[inline]
    fn pixel(&self) -> (i32, i32) {
        if self.x_major {
            (self.x, self.y >> SHIFT)
        } else {
            (self.x >> SHIFT, self.y)
        }
    }

    #[inline]
    fn step(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }
}

/// Extract line segments from `edges` with the progressive probabilistic
/// Hough transform. Edge pixels are visited in an order drawn from `rng`.
///
/// Returned segments run from the end reached walking forward to the end
/// reached walking backward along the detected direction.
pub fn probabilistic_hough<R: Rng + ?Sized>(
    edges: &EdgeMap,
    params: &HoughParams,
    rng: &mut R,
) -> Vec<RawSegment> {
    let mut lines = Vec::new();
    if edges.w == 0 || edges.h == 0 {
        return lines;
    }
    if !(params.rho > 0.0) || !(params.theta > 0.0) {
        warn!(
            "hough: invalid resolution rho={} theta={}",
            params.rho, params.theta
        );
        return lines;
    }
    if params.max_lines == Some(0) {
        return lines;
    }

    let (w, h) = (edges.w as i32, edges.h as i32);
    let threshold = params.threshold.min(i32::MAX as u32) as i32;
    let mut acc = Accumulator::new(w, h, params.rho, params.theta);
    let mut mask: Vec<bool> = edges.data.iter().map(|&v| v != 0).collect();
    let mut pending: Vec<(i32, i32)> = (0..edges.h)
        .flat_map(|y| (0..edges.w).map(move |x| (x, y)))
        .filter(|&(x, y)| edges.is_edge(x, y))
        .map(|(x, y)| (x as i32, y as i32))
        .collect();
    let edge_pixels = pending.len();
    let at = |x: i32, y: i32| (y * w + x) as usize;

    for count in (1..=pending.len()).rev() {
        let pick = rng.random_range(0..count);
        let (px, py) = pending[pick];
        pending[pick] = pending[count - 1];

        // already consumed by an earlier line
        if !mask[at(px, py)] {
            continue;
        }

        let (best_n, best_votes) = acc.vote(px, py);
        if best_votes < threshold {
            continue;
        }

        let (cos_n, sin_n) = acc.trig[best_n];
        let forward = Walker::new(px, py, cos_n, sin_n);
        let mut ends = [(px, py); 2];
        for (k, end) in ends.iter_mut().enumerate() {
            let mut walker = if k == 0 { forward } else { forward.reversed() };
            let mut gap = 0;
            loop {
                let (x, y) = walker.pixel();
                if x < 0 || x >= w || y < 0 || y >= h {
                    break;
                }
                if mask[at(x, y)] {
                    gap = 0;
                    *end = (x, y);
                } else {
                    gap += 1;
                    if gap > params.max_line_gap {
                        break;
                    }
                }
                walker.step();
            }
        }

        let good = (ends[1].0 - ends[0].0).abs() >= params.min_line_length
            || (ends[1].1 - ends[0].1).abs() >= params.min_line_length;

        for (k, end) in ends.iter().enumerate() {
            let mut walker = if k == 0 { forward } else { forward.reversed() };
            loop {
                let (x, y) = walker.pixel();
                if x < 0 || x >= w || y < 0 || y >= h {
                    break;
                }
                let idx = at(x, y);
                if mask[idx] {
                    if good {
                        acc.withdraw(x, y);
                    }
                    mask[idx] = false;
                }
                if (x, y) == *end {
                    break;
                }
                walker.step();
            }
        }

        if good {
            lines.push(RawSegment::new(ends[0].0, ends[0].1, ends[1].0, ends[1].1));
            if params.max_lines.is_some_and(|max| lines.len() >= max) {
                break;
            }
        }
    }

    debug!(
        "hough: edge_pixels={} lines={}",
        edge_pixels,
        lines.len()
    );
    lines
}
