//! Edge stage: blur, Canny edges and the road region of interest.
//!
//! Building blocks used by the built-in segment source:
//!
//! - [`blur`]: 5×5 separable Gaussian (`[1, 4, 6, 4, 1] / 16`) with
//!   replicated borders, rounded to whole intensity levels.
//! - [`grad`]: 3×3 Sobel derivatives with an L1 magnitude.
//! - [`canny`]: non-maximum suppression along 4 quantized directions followed
//!   by 8-connected hysteresis between a low and a high threshold.
//! - [`roi`]: trapezoid covering the road ahead of the vehicle; edges outside
//!   it are cleared.
//!
//! All stages read and write the 0–255 intensity scale.

pub mod blur;
pub mod canny;
pub mod grad;
pub mod options;
pub mod roi;

pub use blur::{gaussian_blur_5x5, GAUSSIAN_5TAP};
pub use canny::canny;
pub use grad::{sobel_gradients, Grad};
pub use options::{BlurParams, CannyParams, RoiParams};
pub use roi::RoiTrapezoid;
