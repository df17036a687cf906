//! Image containers used by the lane pipeline.
//!
//! - [`ImageU8`]: borrowed 8-bit grayscale view with an explicit row stride.
//! - [`ImageF32`]: owned single-channel float plane (0–255 intensity scale).
//! - [`EdgeMap`]: owned binary map produced by the edge stage.
//! - [`io`]: file helpers for the command-line tools.
pub mod edge_map;
pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::edge_map::EdgeMap;
pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut};
pub use self::u8::ImageU8;
