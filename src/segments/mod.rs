//! Raw line segments and the probabilistic Hough extractor.
//!
//! - [`RawSegment`]: four integer endpoint coordinates, the currency between
//!   any line detector and the lane stage.
//! - [`SegmentSource`]: seam for plugging a line detector into the
//!   [`LaneDetector`](crate::LaneDetector).
//! - [`probabilistic_hough`]: progressive probabilistic Hough transform over a
//!   binary edge map. Edge pixels are visited in random order (seeded, so runs
//!   are reproducible); each pixel votes for all quantized angles and, once a
//!   bin reaches the threshold, the corresponding line is walked in both
//!   directions across gaps up to `max_line_gap`. Lines at least
//!   `min_line_length` long are emitted and their pixels withdraw their votes.
//!
//! Complexity
//! - Each edge pixel votes once (O(angles)) and is removed from further
//!   consideration once it belongs to a walked line.

mod hough;
mod options;
mod source;
mod types;

pub use hough::probabilistic_hough;
pub use options::HoughParams;
pub use source::SegmentSource;
pub use types::RawSegment;

#[cfg(test)]
mod tests;
