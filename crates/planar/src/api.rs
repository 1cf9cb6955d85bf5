//! Curated entry points for presentation layers.
//!
//! The two operations a caller needs, in the shapes the original front end
//! used: eight scalars for intersection, a flat coordinate list for the hull.
//! Both have `_with` variants taking an explicit `GeomCfg`.

pub use crate::geom2::rand::{draw_points, draw_segment_pair, CloudCfg, PointCount, ReplayToken};
pub use crate::geom2::{
    check_intersection_coords, compute_convex_hull, GeomCfg, Hull, HullKind, IndexedPoint,
    Intersection, Segment,
};

use crate::geom2::{check_intersection_with, convex_hull_with, points_from_flat};

/// Eight-scalar intersection with explicit tolerances.
#[allow(clippy::too_many_arguments)]
pub fn check_intersection_coords_with(
    cfg: GeomCfg,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> Intersection {
    check_intersection_with(
        cfg,
        Segment::from_coords(x1, y1, x2, y2),
        Segment::from_coords(x3, y3, x4, y4),
    )
}

/// Flat-coordinate hull with explicit tolerances.
pub fn compute_convex_hull_with(cfg: GeomCfg, coords: &[f64]) -> Hull {
    convex_hull_with(cfg, &points_from_flat(coords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn coords_with_default_cfg_matches_plain_entry() {
        let a = check_intersection_coords(0.0, 0.0, 4.0, 4.0, 0.0, 4.0, 4.0, 0.0);
        let b = check_intersection_coords_with(
            GeomCfg::default(),
            0.0,
            0.0,
            4.0,
            4.0,
            0.0,
            4.0,
            4.0,
            0.0,
        );
        assert_eq!(a, b);
        assert_eq!(a, Intersection::Point(vector![2.0, 2.0]));
    }

    #[test]
    fn loose_tolerance_merges_near_collinear_hull() {
        // A 1e-3 bump is a triangle at default tolerance.
        let coords = [0.0, 0.0, 1.0, 1e-3, 2.0, 0.0];
        assert_eq!(compute_convex_hull(&coords).kind, HullKind::Triangle);
        // With a tolerance above the bump the middle point is dropped.
        let hull = compute_convex_hull_with(GeomCfg::uniform(1e-2), &coords);
        assert_eq!(hull.kind, HullKind::Segment);
        assert_eq!(hull.points(), vec![vector![0.0, 0.0], vector![2.0, 0.0]]);
    }
}
