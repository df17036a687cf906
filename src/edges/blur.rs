use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Normalised 5-tap binomial kernel `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// 5×5 Gaussian blur (separable) with replicated borders.
///
/// Output values are rounded to whole levels, matching an 8-bit blurred frame.
pub fn gaussian_blur_5x5(src: &ImageF32) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    if src.is_empty() {
        return ImageF32::new(w, h);
    }
    let radius = (GAUSSIAN_5TAP.len() / 2) as isize;

    let mut horiz = ImageF32::new(w, h);
    for y in 0..h {
        let row = src.row(y);
        let out = horiz.row_mut(y);
        for (x, dst) in out.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius, w);
                acc += tap * row[sx];
            }
            *dst = acc;
        }
    }

    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        let rows: [&[f32]; 5] = std::array::from_fn(|k| {
            horiz.row(clamp_index(y as isize + k as isize - radius, h))
        });
        let dst_row = out.row_mut(y);
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (tap, row) in GAUSSIAN_5TAP.iter().zip(rows.iter()) {
                acc += tap * row[x];
            }
            *dst = acc.round();
        }
    }
    out
}

#[inline]
fn clamp_index(idx: isize, upper: usize) -> usize {
    idx.clamp(0, upper as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_image_is_unchanged() {
        let mut img = ImageF32::new(9, 7);
        img.data.iter_mut().for_each(|v| *v = 120.0);
        let out = gaussian_blur_5x5(&img);
        assert!(out.data.iter().all(|&v| v == 120.0));
    }

    #[test]
    fn impulse_spreads_symmetrically() {
        let mut img = ImageF32::new(9, 9);
        img.set(4, 4, 256.0);
        let out = gaussian_blur_5x5(&img);
        // 256 * 0.375 * 0.375
        assert_eq!(out.get(4, 4), 36.0);
        assert_eq!(out.get(3, 4), out.get(5, 4));
        assert_eq!(out.get(4, 3), out.get(4, 5));
        assert_eq!(out.get(0, 0), 0.0);
    }

    #[test]
    fn empty_image_is_passed_through() {
        let out = gaussian_blur_5x5(&ImageF32::new(0, 4));
        assert!(out.data.is_empty());
    }
}
