//! Structured per-frame report for tooling and debugging.
//!
//! [`DetectionReport`] mirrors the pipeline: input geometry, edge/segment
//! stage counts, per-side aggregates, timings and the final [`LaneResult`].
//! Stages that did not run (for example after a malformed frame) are `None`.
use crate::edges::RoiTrapezoid;
use crate::image::EdgeMap;
use crate::lanes::{LaneAnalysis, SideAggregate};
use crate::segments::RawSegment;
use crate::types::LaneResult;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub bytes_per_pixel: usize,
    pub row_stride: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStage {
    pub edge_pixels: usize,
    pub roi_edge_pixels: usize,
    pub roi: RoiTrapezoid,
    pub segments: Vec<RawSegment>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneStage {
    pub segments_total: usize,
    pub left_candidates: usize,
    pub right_candidates: usize,
    pub discarded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<SideAggregate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<SideAggregate>,
}

impl LaneStage {
    pub fn from_analysis(analysis: &LaneAnalysis) -> Self {
        Self {
            segments_total: analysis.candidates.total(),
            left_candidates: analysis.candidates.left.len(),
            right_candidates: analysis.candidates.right.len(),
            discarded: analysis.candidates.discarded,
            left: analysis.left,
            right: analysis.right,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub luminance_ms: f64,
    pub blur_ms: f64,
    pub canny_ms: f64,
    pub roi_ms: f64,
    pub hough_ms: f64,
    pub lanes_ms: f64,
    pub total_ms: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub input: InputDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<EdgeStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lanes: Option<LaneStage>,
    pub timings: TimingBreakdown,
    pub result: LaneResult,
    /// Masked edge map, kept for visualisation only.
    #[serde(skip)]
    pub edge_map: Option<EdgeMap>,
}
