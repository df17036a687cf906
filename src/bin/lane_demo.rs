use lane_detector::config::lane;
use lane_detector::image::io::{
    load_grayscale_image, save_edge_map, save_lane_overlay, write_json_file,
};
use lane_detector::{Frame, LaneDetector};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = lane::load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let detector = LaneDetector::new(config.params);
    let report = detector.recognize_with_diagnostics(Frame::from(gray.as_view()));

    write_json_file(&config.output.result_json, &report)?;
    println!(
        "Saved lane report to {}",
        config.output.result_json.display()
    );

    if let Some(path) = &config.output.overlay_image {
        save_lane_overlay(&gray, &report.result, path)?;
        println!("Saved lane overlay to {}", path.display());
    }
    if let Some(path) = &config.output.edges_image {
        let edges = report
            .edge_map
            .as_ref()
            .ok_or("Edge stage did not run; no edge map to save")?;
        save_edge_map(edges, path)?;
        println!("Saved edge map to {}", path.display());
    }

    let result = &report.result;
    let segments = report.edges.as_ref().map_or(0, |e| e.segments.len());
    if result.is_valid() {
        let (left, right) = (result.left(), result.right());
        println!(
            "lanes found: left ({}, {}) -> ({}, {}), right ({}, {}) -> ({}, {}); segments={} total_ms={:.3}",
            left.far.x,
            left.far.y,
            left.base.x,
            left.base.y,
            right.far.x,
            right.far.y,
            right.base.x,
            right.base.y,
            segments,
            report.timings.total_ms
        );
    } else {
        println!(
            "no lanes found; segments={} total_ms={:.3}",
            segments, report.timings.total_ms
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: lane_demo <config.json>".to_string()
}
