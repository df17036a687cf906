//! Detector pipeline driving lane extraction end-to-end.
//!
//! The [`LaneDetector`] exposes a simple API: feed one camera frame and get a
//! [`LaneResult`]. Internally it converts the frame to a luminance plane, runs
//! a [`SegmentSource`] (by default the [`EdgeSegmentExtractor`]) and hands the
//! segments to [`crate::lanes`].
//!
//! Typical usage:
//! ```no_run
//! use lane_detector::{Frame, LaneDetector, LaneParams};
//!
//! # fn example(pixels: &[u8]) {
//! let detector = LaneDetector::new(LaneParams::default());
//! let result = detector.recognize(Frame::gray(pixels, 640, 480));
//! if result.is_valid() {
//!     println!("right lane base: {:?}", result.right().base);
//! }
//! # }
//! ```
//!
//! The detector is immutable while processing; every call is independent and
//! a single instance can serve frames from several threads.
use super::extractor::EdgeSegmentExtractor;
use super::params::LaneParams;
use crate::diagnostics::{DetectionReport, EdgeStage, InputDescriptor, LaneStage, TimingBreakdown};
use crate::frame::Frame;
use crate::image::ImageF32;
use crate::lanes::{analyze_segments, extract_lanes};
use crate::segments::{RawSegment, SegmentSource};
use crate::types::LaneResult;
use log::{debug, warn};
use std::time::Instant;

#[derive(Clone, Debug, Default)]
pub struct LaneDetector {
    extractor: EdgeSegmentExtractor,
}

impl LaneDetector {
    pub fn new(params: LaneParams) -> Self {
        Self {
            extractor: EdgeSegmentExtractor::new(params),
        }
    }

    pub fn params(&self) -> &LaneParams {
        self.extractor.params()
    }

    /// Detect lane boundaries in one frame with the built-in segment source.
    pub fn recognize(&self, frame: Frame<'_>) -> LaneResult {
        self.recognize_with_source(frame, &self.extractor)
    }

    /// Detect lane boundaries using an external segment source.
    pub fn recognize_with_source<S>(&self, frame: Frame<'_>, source: &S) -> LaneResult
    where
        S: SegmentSource + ?Sized,
    {
        let start = Instant::now();
        let Some(plane) = luminance_or_log(&frame) else {
            return LaneResult::invalid();
        };
        let segments = source.segments(&plane);
        let result = extract_lanes(segments, plane.h);
        debug!(
            "LaneDetector::recognize {}x{} valid={} in {:.3} ms",
            plane.w,
            plane.h,
            result.is_valid(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        result
    }

    /// Lane boundaries from segments detected elsewhere on a frame of
    /// `frame_height` rows.
    pub fn recognize_segments<I>(&self, segments: I, frame_height: usize) -> LaneResult
    where
        I: IntoIterator<Item = RawSegment>,
    {
        extract_lanes(segments, frame_height)
    }

    /// Run the built-in pipeline and return the result with a detailed report.
    pub fn recognize_with_diagnostics(&self, frame: Frame<'_>) -> DetectionReport {
        let total_start = Instant::now();
        let input = InputDescriptor {
            width: frame.width(),
            height: frame.height(),
            bytes_per_pixel: frame.bytes_per_pixel(),
            row_stride: frame.row_stride(),
        };
        let mut timings = TimingBreakdown::default();

        let lum_start = Instant::now();
        let plane = match frame.luminance() {
            Ok(plane) => plane,
            Err(err) => {
                warn!("LaneDetector: rejecting frame: {err}");
                timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
                return DetectionReport {
                    input,
                    frame_error: Some(err.to_string()),
                    edges: None,
                    lanes: None,
                    timings,
                    result: LaneResult::invalid(),
                    edge_map: None,
                };
            }
        };
        timings.luminance_ms = lum_start.elapsed().as_secs_f64() * 1000.0;

        let extraction = self.extractor.extract_detailed(&plane);
        timings.blur_ms = extraction.blur_ms;
        timings.canny_ms = extraction.canny_ms;
        timings.roi_ms = extraction.roi_ms;
        timings.hough_ms = extraction.hough_ms;

        let lanes_start = Instant::now();
        let analysis = analyze_segments(extraction.segments.iter().copied(), plane.h);
        timings.lanes_ms = lanes_start.elapsed().as_secs_f64() * 1000.0;
        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        debug!(
            "LaneDetector::recognize_with_diagnostics segments={} valid={} total_ms={:.3}",
            extraction.segments.len(),
            analysis.result.is_valid(),
            timings.total_ms
        );

        DetectionReport {
            input,
            frame_error: None,
            lanes: Some(LaneStage::from_analysis(&analysis)),
            edges: Some(EdgeStage {
                edge_pixels: extraction.edge_pixels,
                roi_edge_pixels: extraction.roi_edge_pixels,
                roi: extraction.roi,
                segments: extraction.segments,
            }),
            timings,
            result: analysis.result,
            edge_map: Some(extraction.edges),
        }
    }
}

fn luminance_or_log(frame: &Frame<'_>) -> Option<ImageF32> {
    match frame.luminance() {
        Ok(plane) => Some(plane),
        Err(err) => {
            warn!("LaneDetector: rejecting frame: {err}");
            None
        }
    }
}
