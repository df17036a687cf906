//! Parameter types configuring the detector stages.
//!
//! The defaults reproduce the reference lane policy at typical dash-camera
//! resolutions. Every field can be overridden from JSON; missing fields keep
//! their defaults.
//!
//! The lane geometry itself (slope gates, sampling rows, thickness) is not
//! configurable; see [`crate::lanes`].

use crate::edges::{BlurParams, CannyParams, RoiParams};
use crate::segments::HoughParams;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters for the edge and segment stages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    /// Gaussian pre-blur.
    pub blur: BlurParams,
    /// Canny hysteresis thresholds.
    pub canny: CannyParams,
    /// Road region of interest.
    pub roi: RoiParams,
    /// Probabilistic Hough segment extraction.
    pub hough: HoughParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let params: LaneParams =
            serde_json::from_str(r#"{ "canny": { "low": 40.0 }, "hough": { "threshold": 30 } }"#)
                .expect("valid params");
        assert_eq!(params.canny.low, 40.0);
        assert_eq!(params.canny.high, 150.0);
        assert_eq!(params.hough.threshold, 30);
        assert_eq!(params.hough.min_line_length, 120);
        assert_eq!(params.roi, RoiParams::default());
        assert!(params.blur.enabled);
    }
}
