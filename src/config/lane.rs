use crate::detector::LaneParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct LaneToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: LaneParams,
    pub output: LaneOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct LaneOutputConfig {
    #[serde(rename = "result_json")]
    pub result_json: PathBuf,
    /// Input image with both boundaries drawn on top.
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
    /// Masked Canny edge map fed to the Hough stage.
    #[serde(default)]
    pub edges_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<LaneToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<LaneToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
