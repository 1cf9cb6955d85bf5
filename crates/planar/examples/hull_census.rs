//! Tally hull classifications and intersection outcomes over random inputs.
//!
//! Usage:
//!   cargo run -p planar --example hull_census -- hull
//!   cargo run -p planar --example hull_census -- intersect
//!
//! Grid-snapped inputs make degenerate outcomes (points, segments, overlaps)
//! show up alongside the generic ones.

use std::collections::BTreeMap;

use planar::geom2::rand::{draw_points, draw_segment_pair, CloudCfg, PointCount, ReplayToken};
use planar::geom2::{check_intersection, convex_hull_labeled};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "hull".to_string());
    match mode.as_str() {
        "hull" => hull_census(),
        "intersect" => intersect_census(),
        _ => {
            eprintln!("usage: hull_census [hull|intersect]");
        }
    }
}

fn hull_census() {
    let cfg = CloudCfg {
        count: PointCount::Uniform { min: 0, max: 8 },
        half_extent: 2.0,
        grid: Some(1.0),
    };
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for i in 0..1000 {
        let pts = draw_points(cfg, ReplayToken::new(2025, i));
        let hull = convex_hull_labeled(&pts);
        let key = format!("{} ({})", hull.kind.tag(), hull.kind.vertex_count());
        *counts.entry(key).or_default() += 1;
    }
    for (kind, n) in counts {
        println!("{kind:<20} {n}");
    }
}

fn intersect_census() {
    let cfg = CloudCfg {
        half_extent: 2.0,
        grid: Some(1.0),
        ..CloudCfg::default()
    };
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for i in 0..1000 {
        let (s1, s2) = draw_segment_pair(cfg, ReplayToken::new(2025, i));
        *counts.entry(check_intersection(s1, s2).tag()).or_default() += 1;
    }
    for (tag, n) in counts {
        println!("{tag:<28} {n}");
    }
}
