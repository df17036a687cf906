//! Tunables for the edge stage. Defaults reproduce the reference lane policy.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurParams {
    /// Apply the 5×5 Gaussian before edge detection.
    pub enabled: bool,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Hysteresis thresholds on the L1 Sobel magnitude (0–255 input scale).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyParams {
    pub low: f32,
    pub high: f32,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low: 50.0,
            high: 150.0,
        }
    }
}

/// Trapezoid region of interest as fractions of the frame size.
///
/// Vertices: `(0, h)`, `(apex_left * w, apex_height * h)`,
/// `(apex_right * w, apex_height * h)`, `(w, h)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiParams {
    pub apex_left: f32,
    pub apex_right: f32,
    pub apex_height: f32,
}

impl Default for RoiParams {
    fn default() -> Self {
        Self {
            apex_left: 0.48,
            apex_right: 0.52,
            apex_height: 0.58,
        }
    }
}
