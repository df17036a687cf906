//! Lane detector orchestrating frame ingestion, segment extraction and the
//! lane stage.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and CLI.
//! - `extractor` – the built-in [`EdgeSegmentExtractor`] segment source.
//! - `pipeline` – the main [`LaneDetector`] implementation.

mod extractor;
pub mod params;
mod pipeline;

pub use extractor::{EdgeSegmentExtractor, Extraction};
pub use params::LaneParams;
pub use pipeline::LaneDetector;
