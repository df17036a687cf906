use lane_detector::{Frame, LaneDetector, LaneParams};

/// Dark road with two bright markings converging towards the horizon.
fn synthetic_road(w: usize, h: usize) -> Vec<u8> {
    let markings = [
        ((0.125 * w as f32, h as f32 - 1.0), (0.47 * w as f32, 0.6 * h as f32)),
        ((0.875 * w as f32, h as f32 - 1.0), (0.53 * w as f32, 0.6 * h as f32)),
    ];
    let mut gray = vec![20u8; w * h];
    for y in 0..h {
        for x in 0..w {
            let p = (x as f32, y as f32);
            if markings.iter().any(|&(a, b)| distance_to_segment(p, a, b) <= 4.0) {
                gray[y * w + x] = 255;
            }
        }
    }
    gray
}

fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let t = (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / (dx * dx + dy * dy)).clamp(0.0, 1.0);
    (p.0 - a.0 - t * dx).hypot(p.1 - a.1 - t * dy)
}

fn main() {
    env_logger::init();

    // Demo: synthesizes a road frame and runs the detector on it
    let w = 640usize;
    let h = 480usize;
    let gray = synthetic_road(w, h);

    let detector = LaneDetector::new(LaneParams::default());
    let report = detector.recognize_with_diagnostics(Frame::gray(&gray, w, h));
    let res = report.result;
    println!(
        "valid={} thickness={} latency_ms={:.3}",
        res.is_valid(),
        res.thickness(),
        report.timings.total_ms
    );
    for (name, p) in ["right.far", "right.base", "left.far", "left.base"]
        .iter()
        .zip(res.coordinates())
    {
        println!("{name}: ({}, {})", p.x, p.y);
    }
}
