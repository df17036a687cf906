//! I/O helpers for grayscale images, lane overlays and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG into an owned 8-bit gray buffer.
//! - `save_edge_map`: write a binary edge map (edges white) to a PNG.
//! - `save_lane_overlay`: draw both lane boundaries over the gray input.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{EdgeMap, ImageU8};
use crate::types::{LaneBoundary, LaneResult};
use image::{GrayImage, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Colour used for lane boundaries in overlays.
pub const LANE_COLOR: Rgb<u8> = Rgb([48, 63, 159]);

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given tightly packed bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            stride: width,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayImageU8::new(width, height, img.into_raw()))
}

/// Save an edge map as a black/white PNG.
pub fn save_edge_map(edges: &EdgeMap, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(edges.w as u32, edges.h as u32, edges.data.clone())
        .ok_or_else(|| "Failed to create edge image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Render `result` over the grayscale input. Invalid results leave the
/// picture untouched; boundary points outside the frame are clipped.
pub fn render_lane_overlay(gray: &GrayImageU8, result: &LaneResult) -> RgbImage {
    let mut canvas = RgbImage::new(gray.width as u32, gray.height as u32);
    for y in 0..gray.height {
        let row = &gray.data[y * gray.stride..y * gray.stride + gray.width];
        for (x, &v) in row.iter().enumerate() {
            canvas.put_pixel(x as u32, y as u32, Rgb([v, v, v]));
        }
    }
    if result.is_valid() {
        for boundary in [result.right(), result.left()] {
            draw_boundary(&mut canvas, &boundary, result.thickness(), LANE_COLOR);
        }
    }
    canvas
}

/// Save the lane overlay of `result` on `gray` as an image file.
pub fn save_lane_overlay(gray: &GrayImageU8, result: &LaneResult, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    render_lane_overlay(gray, result)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Stamp a disc of diameter `thickness` at unit steps along the boundary.
fn draw_boundary(canvas: &mut RgbImage, boundary: &LaneBoundary, thickness: f32, color: Rgb<u8>) {
    let (x0, y0) = (boundary.far.x as f32, boundary.far.y as f32);
    let (x1, y1) = (boundary.base.x as f32, boundary.base.y as f32);
    let length = (x1 - x0).hypot(y1 - y0);
    let steps = length.ceil().max(1.0) as usize;
    let radius = (thickness * 0.5).max(0.5);
    let reach = radius.ceil() as i64;
    let (w, h) = (canvas.width() as i64, canvas.height() as i64);

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let cx = x0 + (x1 - x0) * t;
        let cy = y0 + (y1 - y0) * t;
        let (px, py) = (cx.round() as i64, cy.round() as i64);
        // skip stamps that cannot touch the canvas
        if px + reach < 0 || py + reach < 0 || px - reach >= w || py - reach >= h {
            continue;
        }
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let (x, y) = (px + dx, py + dy);
                if x < 0 || y < 0 || x >= w || y >= h {
                    continue;
                }
                let (fx, fy) = (x as f32 - cx, y as f32 - cy);
                if fx * fx + fy * fy <= radius * radius {
                    canvas.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
