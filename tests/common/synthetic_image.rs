/// Lane marking endpoints `(bottom, top)` used by [`road_u8`] on a 640x480 frame.
pub const LEFT_MARKING: ((f32, f32), (f32, f32)) = ((80.0, 479.0), (300.0, 290.0));
pub const RIGHT_MARKING: ((f32, f32), (f32, f32)) = ((560.0, 479.0), (340.0, 290.0));

/// Generates a black road with two white lane markings about 8 px wide.
///
/// Marking endpoints are given for 640x480 and scaled to `width`x`height`.
pub fn road_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let sx = width as f32 / 640.0;
    let sy = height as f32 / 480.0;
    let scale = |((x0, y0), (x1, y1)): ((f32, f32), (f32, f32))| {
        ((x0 * sx, y0 * sy), (x1 * sx, y1 * sy))
    };
    let markings = [scale(LEFT_MARKING), scale(RIGHT_MARKING)];

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let p = (x as f32, y as f32);
            if markings
                .iter()
                .any(|&(a, b)| distance_to_segment(p, a, b) <= 4.0)
            {
                img[y * width + x] = 255;
            }
        }
    }
    img
}

/// Expands a gray buffer to interleaved RGB with padded rows.
pub fn to_padded_rgb(gray: &[u8], width: usize, height: usize, row_stride: usize) -> Vec<u8> {
    assert!(row_stride >= width * 3, "stride must hold a full row");
    let mut out = vec![0u8; row_stride * height];
    for y in 0..height {
        for x in 0..width {
            let v = gray[y * width + x];
            let base = y * row_stride + x * 3;
            out[base] = v;
            out[base + 1] = v / 2;
            out[base + 2] = 255 - v;
        }
    }
    out
}

fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let t = (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / (dx * dx + dy * dy)).clamp(0.0, 1.0);
    (p.0 - a.0 - t * dx).hypot(p.1 - a.1 - t * dy)
}
