//! Camera frame ingestion.
//!
//! A [`Frame`] borrows the caller's pixel buffer for the duration of a call and
//! converts it into an owned luminance plane. Only the first byte of every
//! pixel is read, which covers single-channel gray buffers, the Y plane of YUV
//! layouts and any interleaved layout whose leading channel is luminance.
use crate::image::{ImageF32, ImageU8, ImageViewMut};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("no pixel data")]
    MissingData,
    #[error("frame has zero size ({width}x{height})")]
    Empty { width: usize, height: usize },
    #[error("bytes per pixel must be at least 1")]
    ZeroBytesPerPixel,
    #[error("row stride {stride} is smaller than a row of {row_bytes} bytes")]
    StrideTooSmall { stride: usize, row_bytes: usize },
    #[error("pixel buffer holds {actual} bytes, frame needs {expected}")]
    BufferTooShort { expected: usize, actual: usize },
    #[error("frame dimensions overflow")]
    Overflow,
}

/// Borrowed view of one camera frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pixels: Option<&'a [u8]>,
    bytes_per_pixel: usize,
    width: usize,
    height: usize,
    row_stride: Option<usize>,
}

impl<'a> Frame<'a> {
    /// Wrap a host buffer. `pixels == None` models an absent buffer.
    pub fn from_raw(
        pixels: Option<&'a [u8]>,
        bytes_per_pixel: usize,
        width: usize,
        height: usize,
    ) -> Self {
        Self {
            pixels,
            bytes_per_pixel,
            width,
            height,
            row_stride: None,
        }
    }

    /// Tightly packed 8-bit grayscale frame.
    pub fn gray(pixels: &'a [u8], width: usize, height: usize) -> Self {
        Self::from_raw(Some(pixels), 1, width, height)
    }

    /// Use an explicit distance in bytes between row starts (padded planes).
    pub fn with_row_stride(mut self, row_stride: usize) -> Self {
        self.row_stride = Some(row_stride);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
            .unwrap_or(self.width.saturating_mul(self.bytes_per_pixel))
    }

    /// Check the geometry against the buffer; returns the buffer on success.
    pub fn validate(&self) -> Result<&'a [u8], FrameError> {
        let pixels = self.pixels.ok_or(FrameError::MissingData)?;
        if self.bytes_per_pixel == 0 {
            return Err(FrameError::ZeroBytesPerPixel);
        }
        if self.width == 0 || self.height == 0 {
            return Err(FrameError::Empty {
                width: self.width,
                height: self.height,
            });
        }
        let row_bytes = self
            .width
            .checked_mul(self.bytes_per_pixel)
            .ok_or(FrameError::Overflow)?;
        let stride = self.row_stride.unwrap_or(row_bytes);
        if stride < row_bytes {
            return Err(FrameError::StrideTooSmall { stride, row_bytes });
        }
        let expected = (self.height - 1)
            .checked_mul(stride)
            .and_then(|v| v.checked_add(row_bytes))
            .ok_or(FrameError::Overflow)?;
        if pixels.len() < expected {
            return Err(FrameError::BufferTooShort {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(pixels)
    }

    /// Owned luminance plane (0–255 scale). The buffer is not retained.
    pub fn luminance(&self) -> Result<ImageF32, FrameError> {
        let pixels = self.validate()?;
        let stride = self.row_stride();
        if self.bytes_per_pixel == 1 {
            let view = ImageU8 {
                w: self.width,
                h: self.height,
                stride,
                data: pixels,
            };
            return Ok(view.to_f32());
        }
        let mut out = ImageF32::new(self.width, self.height);
        for y in 0..self.height {
            let row = &pixels[y * stride..y * stride + self.width * self.bytes_per_pixel];
            let dst = out.row_mut(y);
            for (d, px) in dst.iter_mut().zip(row.chunks_exact(self.bytes_per_pixel)) {
                *d = px[0] as f32;
            }
        }
        Ok(out)
    }
}

impl<'a> From<ImageU8<'a>> for Frame<'a> {
    fn from(view: ImageU8<'a>) -> Self {
        Frame::gray(view.data, view.w, view.h).with_row_stride(view.stride)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_buffer_is_reported() {
        let frame = Frame::from_raw(None, 1, 4, 4);
        assert_eq!(frame.luminance().unwrap_err(), FrameError::MissingData);
    }

    #[test]
    fn short_buffer_is_reported() {
        let data = [0u8; 15];
        let err = Frame::gray(&data, 4, 4).luminance().unwrap_err();
        assert_eq!(
            err,
            FrameError::BufferTooShort {
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn degenerate_geometry_is_reported() {
        let data = [0u8; 16];
        assert_eq!(
            Frame::from_raw(Some(&data), 0, 4, 4).luminance().unwrap_err(),
            FrameError::ZeroBytesPerPixel
        );
        assert!(matches!(
            Frame::gray(&data, 0, 4).luminance(),
            Err(FrameError::Empty { .. })
        ));
        assert!(matches!(
            Frame::gray(&data, 4, 4).with_row_stride(3).luminance(),
            Err(FrameError::StrideTooSmall { .. })
        ));
    }

    #[test]
    fn first_channel_is_used_for_multi_byte_pixels() {
        let data = [10u8, 99, 99, 20, 99, 99, 30, 99, 99, 40, 99, 99];
        let plane = Frame::from_raw(Some(&data), 3, 2, 2).luminance().unwrap();
        assert_eq!(plane.data, vec![10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn gray_view_converts_with_its_stride() {
        let data = [1u8, 2, 9, 3, 4, 9];
        let view = ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        let frame = Frame::from(view.clone());
        assert_eq!(frame.row_stride(), 3);
        assert_eq!(frame.luminance().unwrap(), view.to_f32());
    }

    #[test]
    fn padded_rows_are_skipped() {
        // 3x2 frame with 5-byte rows; last row may omit its padding
        let data = [1u8, 2, 3, 0, 0, 4, 5, 6];
        let plane = Frame::gray(&data, 3, 2)
            .with_row_stride(5)
            .luminance()
            .unwrap();
        assert_eq!(plane.data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
