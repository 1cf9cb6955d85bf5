//! Property tests for hull and intersection invariants.
//!
//! Coordinates are small integers so every predicate is evaluated exactly and
//! collinear or duplicate configurations show up often.

use super::*;
use nalgebra::Vector2;
use proptest::prelude::*;

fn grid_point() -> impl Strategy<Value = Vector2<f64>> {
    (-20i32..=20, -20i32..=20).prop_map(|(x, y)| Vector2::new(x as f64, y as f64))
}

fn grid_segment() -> impl Strategy<Value = Segment> {
    (grid_point(), grid_point()).prop_map(|(p, q)| Segment::new(p, q))
}

fn normalize_overlap(r: Intersection) -> Intersection {
    match r {
        Intersection::Overlap(a, b) if (b.x, b.y) < (a.x, a.y) => Intersection::Overlap(b, a),
        other => other,
    }
}

proptest! {
    #[test]
    fn hull_vertices_come_from_input(pts in prop::collection::vec(grid_point(), 0..40)) {
        let hull = convex_hull_labeled(&pts);
        prop_assert_eq!(hull.kind.vertex_count(), hull.len());
        for v in &hull.vertices {
            prop_assert!(v.index >= 1 && v.index <= pts.len());
            prop_assert_eq!(pts[v.index - 1], v.p);
        }
        // Distinct vertices.
        for (i, a) in hull.vertices.iter().enumerate() {
            for b in &hull.vertices[i + 1..] {
                prop_assert!(a.p != b.p);
            }
        }
    }

    #[test]
    fn hull_contains_every_input(pts in prop::collection::vec(grid_point(), 1..40)) {
        let hull = convex_hull_labeled(&pts);
        for p in &pts {
            prop_assert!(hull.contains(*p), "{:?} outside {:?}", p, hull.points());
        }
    }

    #[test]
    fn hull_is_strictly_ccw(pts in prop::collection::vec(grid_point(), 3..40)) {
        let hull = convex_hull_labeled(&pts);
        let v = hull.points();
        let n = v.len();
        if n >= 3 {
            for k in 0..n {
                let o = orientation(v[k], v[(k + 1) % n], v[(k + 2) % n]);
                prop_assert_eq!(o, Orientation::CounterClockwise);
            }
        }
        // Starts at the lexicographic minimum of the input.
        if let Some(first) = v.first() {
            for p in &pts {
                prop_assert!((first.x, first.y) <= (p.x, p.y));
            }
        }
    }

    #[test]
    fn hull_is_idempotent(pts in prop::collection::vec(grid_point(), 0..40)) {
        let once = convex_hull_labeled(&pts);
        let twice = convex_hull_labeled(&once.points());
        prop_assert_eq!(once.kind, twice.kind);
        prop_assert_eq!(once.points(), twice.points());
    }

    #[test]
    fn hull_ignores_input_order(pts in prop::collection::vec(grid_point(), 0..30)) {
        let mut rev = pts.clone();
        rev.reverse();
        let a = convex_hull_labeled(&pts);
        let b = convex_hull_labeled(&rev);
        prop_assert_eq!(a.kind, b.kind);
        prop_assert_eq!(a.points(), b.points());
    }

    #[test]
    fn intersection_is_symmetric(s1 in grid_segment(), s2 in grid_segment()) {
        let ab = normalize_overlap(check_intersection(s1, s2));
        let ba = normalize_overlap(check_intersection(s2, s1));
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn intersection_ignores_endpoint_order(s1 in grid_segment(), s2 in grid_segment()) {
        let a = check_intersection(s1, s2);
        let b = check_intersection(s1.reversed(), s2.reversed());
        prop_assert_eq!(a.tag(), b.tag());
        prop_assert_eq!(a.intersects(), segments_intersect(s1.p, s1.q, s2.p, s2.q)
            || (s1.is_degenerate() && s2.is_degenerate() && s1.p == s2.p));
    }

    #[test]
    fn intersection_point_lies_on_both(s1 in grid_segment(), s2 in grid_segment()) {
        if let Intersection::Point(p) = check_intersection(s1, s2) {
            let slack = 1e-9;
            for s in [s1, s2] {
                let lo_x = s.p.x.min(s.q.x) - slack;
                let hi_x = s.p.x.max(s.q.x) + slack;
                let lo_y = s.p.y.min(s.q.y) - slack;
                let hi_y = s.p.y.max(s.q.y) + slack;
                prop_assert!(p.x >= lo_x && p.x <= hi_x && p.y >= lo_y && p.y <= hi_y);
            }
        }
    }
}
