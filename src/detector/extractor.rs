//! Built-in segment source: blur → Canny → ROI mask → probabilistic Hough.
use super::params::LaneParams;
use crate::edges::{canny, gaussian_blur_5x5, RoiTrapezoid};
use crate::image::{EdgeMap, ImageF32};
use crate::segments::{probabilistic_hough, RawSegment, SegmentSource};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::borrow::Cow;
use std::time::Instant;

/// Per-stage output of one extraction.
#[derive(Clone, Debug)]
pub struct Extraction {
    pub segments: Vec<RawSegment>,
    /// Edges after ROI masking
    pub edges: EdgeMap,
    pub roi: RoiTrapezoid,
    /// Edge pixels before masking
    pub edge_pixels: usize,
    pub roi_edge_pixels: usize,
    pub blur_ms: f64,
    pub canny_ms: f64,
    pub roi_ms: f64,
    pub hough_ms: f64,
}

#[derive(Clone, Debug, Default)]
pub struct EdgeSegmentExtractor {
    params: LaneParams,
}

impl EdgeSegmentExtractor {
    pub fn new(params: LaneParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    pub fn extract_detailed(&self, image: &ImageF32) -> Extraction {
        let blur_start = Instant::now();
        let blurred = if self.params.blur.enabled {
            Cow::Owned(gaussian_blur_5x5(image))
        } else {
            Cow::Borrowed(image)
        };
        let blur_ms = blur_start.elapsed().as_secs_f64() * 1000.0;

        let canny_start = Instant::now();
        let mut edges = canny(&blurred, &self.params.canny);
        let edge_pixels = edges.count();
        let canny_ms = canny_start.elapsed().as_secs_f64() * 1000.0;

        let roi_start = Instant::now();
        let roi = RoiTrapezoid::for_frame(image.w, image.h, &self.params.roi);
        let roi_edge_pixels = roi.apply(&mut edges);
        let roi_ms = roi_start.elapsed().as_secs_f64() * 1000.0;

        let hough_start = Instant::now();
        let mut rng = StdRng::seed_from_u64(self.params.hough.seed);
        let segments = probabilistic_hough(&edges, &self.params.hough, &mut rng);
        let hough_ms = hough_start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "EdgeSegmentExtractor: {}x{} edges={} roi_edges={} segments={}",
            image.w,
            image.h,
            edge_pixels,
            roi_edge_pixels,
            segments.len()
        );

        Extraction {
            segments,
            edges,
            roi,
            edge_pixels,
            roi_edge_pixels,
            blur_ms,
            canny_ms,
            roi_ms,
            hough_ms,
        }
    }
}

impl SegmentSource for EdgeSegmentExtractor {
    fn segments(&self, image: &ImageF32) -> Vec<RawSegment> {
        self.extract_detailed(image).segments
    }
}
