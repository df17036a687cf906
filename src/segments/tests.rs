use super::*;
use crate::image::EdgeMap;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn horizontal_run(edges: &mut EdgeMap, y: usize, xs: std::ops::Range<usize>) {
    for x in xs {
        edges.mark(x, y);
    }
}

fn run(edges: &EdgeMap, params: &HoughParams) -> Vec<RawSegment> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    probabilistic_hough(edges, params, &mut rng)
}

fn span(seg: &RawSegment) -> (i32, i32) {
    (seg.x0.min(seg.x1), seg.x0.max(seg.x1))
}

#[test]
fn empty_map_yields_no_segments() {
    let edges = EdgeMap::new(64, 48);
    assert!(run(&edges, &HoughParams::default()).is_empty());
    assert!(run(&EdgeMap::new(0, 0), &HoughParams::default()).is_empty());
}

#[test]
fn long_horizontal_run_becomes_one_segment() {
    let mut edges = EdgeMap::new(300, 100);
    horizontal_run(&mut edges, 40, 20..220);
    let segs = run(&edges, &HoughParams::default());
    assert_eq!(segs.len(), 1, "got {segs:?}");
    assert_eq!(span(&segs[0]), (20, 219));
    assert_eq!((segs[0].y0, segs[0].y1), (40, 40));
}

#[test]
fn gaps_shorter_than_the_limit_are_bridged() {
    let mut edges = EdgeMap::new(300, 100);
    horizontal_run(&mut edges, 60, 20..100);
    horizontal_run(&mut edges, 60, 130..230);
    let segs = run(&edges, &HoughParams::default());
    assert_eq!(segs.len(), 1, "got {segs:?}");
    assert_eq!(span(&segs[0]), (20, 229));
}

#[test]
fn short_runs_are_rejected() {
    let mut edges = EdgeMap::new(200, 100);
    horizontal_run(&mut edges, 30, 10..70);
    assert!(run(&edges, &HoughParams::default()).is_empty());
}

#[test]
fn max_lines_caps_the_output() {
    let mut edges = EdgeMap::new(300, 100);
    horizontal_run(&mut edges, 20, 10..250);
    horizontal_run(&mut edges, 80, 10..250);
    let all = run(&edges, &HoughParams::default());
    assert_eq!(all.len(), 2);
    let capped = run(
        &edges,
        &HoughParams {
            max_lines: Some(1),
            ..HoughParams::default()
        },
    );
    assert_eq!(capped.len(), 1);
}

#[test]
fn same_seed_same_segments() {
    let mut edges = EdgeMap::new(320, 240);
    for i in 0..180 {
        edges.mark(40 + i, 200 - i / 2);
        edges.mark(280 - i, 200 - i / 2);
    }
    let params = HoughParams {
        min_line_length: 60,
        ..HoughParams::default()
    };
    assert_eq!(run(&edges, &params), run(&edges, &params));
}

#[test]
fn invalid_resolution_is_rejected() {
    let mut edges = EdgeMap::new(300, 100);
    horizontal_run(&mut edges, 40, 20..220);
    let params = HoughParams {
        rho: 0.0,
        ..HoughParams::default()
    };
    assert!(run(&edges, &params).is_empty());
}

#[test]
fn raw_segment_conversions() {
    let a: RawSegment = [1, 2, 3, 4].into();
    let b: RawSegment = (1, 2, 3, 4).into();
    assert_eq!(a, b);
}

#[test]
fn coarse_distance_resolution_does_not_overflow_the_accumulator() {
    let mut edges = EdgeMap::new(100, 3);
    edges.mark(99, 1);
    let params = HoughParams {
        rho: 103.0,
        threshold: 1,
        ..HoughParams::default()
    };
    assert!(run(&edges, &params).is_empty());

    let mut row = EdgeMap::new(300, 100);
    horizontal_run(&mut row, 90, 20..220);
    let coarse = HoughParams {
        rho: 250.0,
        threshold: 5,
        ..HoughParams::default()
    };
    for seg in run(&row, &coarse) {
        assert!(seg.x0.max(seg.x1) < 300 && seg.y0.max(seg.y1) < 100);
    }
}

#[test]
fn extreme_coordinates_do_not_overflow() {
    let seg = RawSegment::new(i32::MAX, 0, i32::MAX - 10, 5);
    assert_eq!(seg.slope(), -0.5);
    assert_eq!(seg.midpoint(), crate::types::Point::new(i32::MAX - 5, 2));

    let wide = RawSegment::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
    assert_eq!(wide.slope(), 1.0);
    assert_eq!(wide.midpoint(), crate::types::Point::new(0, 0));
}
