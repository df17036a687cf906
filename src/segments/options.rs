use serde::{Deserialize, Serialize};

/// Probabilistic Hough parameters.
///
/// Defaults: 2 px distance resolution, 1° angular resolution, 50 votes,
/// 120 px minimum length and 100 px maximum gap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Distance resolution of the accumulator (pixels).
    pub rho: f32,
    /// Angular resolution of the accumulator (radians).
    pub theta: f32,
    /// Minimum votes for a line hypothesis.
    pub threshold: u32,
    /// Lines shorter than this along both axes are dropped (pixels).
    pub min_line_length: i32,
    /// Largest run of missing edge pixels bridged while walking a line.
    pub max_line_gap: i32,
    /// Stop after this many lines; `None` keeps all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,
    /// Seed of the visiting-order RNG.
    pub seed: u64,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho: 2.0,
            theta: std::f32::consts::PI / 180.0,
            threshold: 50,
            min_line_length: 120,
            max_line_gap: 100,
            max_lines: None,
            seed: u64::MAX,
        }
    }
}
