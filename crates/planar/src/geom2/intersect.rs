//! Segment intersection: decision procedure plus crossing-point solve.
//!
//! Order of checks
//! - Both segments degenerate (each a single point): compare the two points.
//! - Four-orientation test with collinear endpoint-on-segment special cases.
//! - Fully collinear pair: the overlap is the middle two of the four endpoints
//!   in lexicographic order.
//! - Otherwise solve the two lines via the determinant formula.
//!
//! Every input maps to exactly one `Intersection` variant; nothing panics.

use nalgebra::Vector2;

use super::orient::{on_segment, orientation_eps, Orientation};
use super::types::{cmp_lex, GeomCfg, Segment};

/// Outcome of intersecting two segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    NoIntersection,
    /// Proper crossing, endpoint touch, or collinear overlap of zero length.
    Point(Vector2<f64>),
    /// Collinear overlap from `a` to `b` (`a` lexicographically before `b`).
    Overlap(Vector2<f64>, Vector2<f64>),
    /// All four endpoints coincide.
    AllPointsIdentical(Vector2<f64>),
    /// Both inputs are single points, at different locations.
    DegenerateBothPointPairs,
    /// The orientation test reports an intersection but the line solve hit a
    /// near-zero determinant. Indicates a tolerance mismatch.
    IntersectsButUnresolved,
}

impl Intersection {
    /// True for every variant that reports a common point.
    #[inline]
    pub fn intersects(&self) -> bool {
        matches!(
            self,
            Intersection::Point(_)
                | Intersection::Overlap(..)
                | Intersection::AllPointsIdentical(_)
                | Intersection::IntersectsButUnresolved
        )
    }

    /// Single intersection point, when there is one.
    #[inline]
    pub fn point(&self) -> Option<Vector2<f64>> {
        match *self {
            Intersection::Point(p) | Intersection::AllPointsIdentical(p) => Some(p),
            _ => None,
        }
    }

    /// Stable machine-readable tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Intersection::NoIntersection => "no_intersection",
            Intersection::Point(_) => "point",
            Intersection::Overlap(..) => "overlap",
            Intersection::AllPointsIdentical(_) => "all_points_identical",
            Intersection::DegenerateBothPointPairs => "degenerate_point_pairs",
            Intersection::IntersectsButUnresolved => "intersects_but_unresolved",
        }
    }
}

/// Whether the closed segments `p1q1` and `p2q2` share at least one point.
pub fn segments_intersect(
    p1: Vector2<f64>,
    q1: Vector2<f64>,
    p2: Vector2<f64>,
    q2: Vector2<f64>,
) -> bool {
    segments_intersect_eps(p1, q1, p2, q2, GeomCfg::default().eps_orient)
}

fn segments_intersect_eps(
    p1: Vector2<f64>,
    q1: Vector2<f64>,
    p2: Vector2<f64>,
    q2: Vector2<f64>,
    eps: f64,
) -> bool {
    let o1 = orientation_eps(p1, q1, p2, eps);
    let o2 = orientation_eps(p1, q1, q2, eps);
    let o3 = orientation_eps(p2, q2, p1, eps);
    let o4 = orientation_eps(p2, q2, q1, eps);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1.is_collinear() && on_segment(p1, p2, q1))
        || (o2.is_collinear() && on_segment(p1, q2, q1))
        || (o3.is_collinear() && on_segment(p2, p1, q2))
        || (o4.is_collinear() && on_segment(p2, q1, q2))
}

/// Intersection of the infinite lines through `p1p2` and `p3p4`.
///
/// `None` when `|denom| < eps` (parallel or coincident lines).
pub fn line_intersection(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    p3: Vector2<f64>,
    p4: Vector2<f64>,
    eps: f64,
) -> Option<Vector2<f64>> {
    let (x1, y1) = (p1.x, p1.y);
    let (x2, y2) = (p2.x, p2.y);
    let (x3, y3) = (p3.x, p3.y);
    let (x4, y4) = (p4.x, p4.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < eps {
        return None;
    }
    let d12 = x1 * y2 - y1 * x2;
    let d34 = x3 * y4 - y3 * x4;
    let px = (d12 * (x3 - x4) - (x1 - x2) * d34) / denom;
    let py = (d12 * (y3 - y4) - (y1 - y2) * d34) / denom;
    Some(Vector2::new(px, py))
}

/// Classify the intersection of two segments using default tolerances.
#[inline]
pub fn check_intersection(s1: Segment, s2: Segment) -> Intersection {
    check_intersection_with(GeomCfg::default(), s1, s2)
}

/// Eight-scalar form: segments `(x1,y1)-(x2,y2)` and `(x3,y3)-(x4,y4)`.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn check_intersection_coords(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> Intersection {
    check_intersection(
        Segment::from_coords(x1, y1, x2, y2),
        Segment::from_coords(x3, y3, x4, y4),
    )
}

/// Classify the intersection of two segments with explicit tolerances.
pub fn check_intersection_with(cfg: GeomCfg, s1: Segment, s2: Segment) -> Intersection {
    let Segment { p: p1, q: q1 } = s1;
    let Segment { p: p2, q: q2 } = s2;

    // Two point-"segments" are decided before anything else.
    if s1.is_degenerate() && s2.is_degenerate() {
        return if p1 == p2 {
            Intersection::AllPointsIdentical(p1)
        } else {
            Intersection::DegenerateBothPointPairs
        };
    }

    if !segments_intersect_eps(p1, q1, p2, q2, cfg.eps_orient) {
        return Intersection::NoIntersection;
    }

    if orientation_eps(p1, q1, p2, cfg.eps_orient) == Orientation::Collinear
        && orientation_eps(p1, q1, q2, cfg.eps_orient) == Orientation::Collinear
    {
        let mut pts = [p1, q1, p2, q2];
        pts.sort_by(cmp_lex);
        let (a, b) = (pts[1], pts[2]);
        return if a == b {
            Intersection::Point(a)
        } else {
            Intersection::Overlap(a, b)
        };
    }

    match line_intersection(p1, q1, p2, q2, cfg.eps_denom) {
        Some(pt) => Intersection::Point(pt),
        None => Intersection::IntersectsButUnresolved,
    }
}
