//! Convex hull via Andrew's monotone chain, with classification by vertex count.
//!
//! One builder serves both call shapes (flat coordinates and labelled points).
//! Labels are tracked throughout and dropped by `Hull::points` when the caller
//! does not need them.
//!
//! Conventions
//! - Duplicates are removed by exact coordinate equality; the first occurrence
//!   in input order is kept.
//! - A turn that is not strictly counter-clockwise pops the middle point in
//!   both chains, so collinear boundary points are never vertices.
//! - Output is counter-clockwise, starting at the lexicographically smallest
//!   vertex (min x, then min y).

use nalgebra::Vector2;

use super::orient::{on_segment, orientation_eps, Orientation};
use super::types::{cmp_lex, GeomCfg, IndexedPoint};

/// Hull classification by number of distinct vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HullKind {
    Empty,
    Point,
    Segment,
    Triangle,
    Quadrilateral,
    /// Five or more vertices.
    Polygon(usize),
}

impl HullKind {
    pub fn from_vertex_count(n: usize) -> Self {
        match n {
            0 => HullKind::Empty,
            1 => HullKind::Point,
            2 => HullKind::Segment,
            3 => HullKind::Triangle,
            4 => HullKind::Quadrilateral,
            n => HullKind::Polygon(n),
        }
    }

    pub fn vertex_count(self) -> usize {
        match self {
            HullKind::Empty => 0,
            HullKind::Point => 1,
            HullKind::Segment => 2,
            HullKind::Triangle => 3,
            HullKind::Quadrilateral => 4,
            HullKind::Polygon(n) => n,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            HullKind::Empty => "empty",
            HullKind::Point => "point",
            HullKind::Segment => "segment",
            HullKind::Triangle => "triangle",
            HullKind::Quadrilateral => "quadrilateral",
            HullKind::Polygon(_) => "polygon",
        }
    }
}

/// Classified convex hull.
///
/// Invariants:
/// - `kind.vertex_count() == vertices.len()`.
/// - `vertices` are CCW from the lexicographically smallest one; a `Segment`
///   hull lists its endpoints in lexicographic order.
/// - `distinct >= vertices.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    pub kind: HullKind,
    pub vertices: Vec<IndexedPoint>,
    /// Number of distinct input points (after duplicate removal).
    pub distinct: usize,
}

impl Hull {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices without labels, in hull order.
    pub fn points(&self) -> Vec<Vector2<f64>> {
        self.vertices.iter().map(|v| v.p).collect()
    }

    /// Labelled vertices for presentation. Same as `vertices` except when the
    /// input has exactly two distinct points: those are listed in input order.
    /// A segment hull of three or more collinear points stays lexicographic.
    pub fn labeled(&self) -> Vec<IndexedPoint> {
        let mut out = self.vertices.clone();
        if self.distinct == 2 {
            out.sort_by_key(|v| v.index);
        }
        out
    }

    /// Inside-or-on-boundary test with default tolerance.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.contains_eps(p, GeomCfg::default().eps_orient)
    }

    /// Inside-or-on-boundary test; boundary closeness uses the orientation
    /// tolerance `eps`.
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        let v = &self.vertices;
        match v.len() {
            0 => false,
            1 => v[0].p == p,
            2 => {
                orientation_eps(v[0].p, v[1].p, p, eps).is_collinear()
                    && on_segment(v[0].p, p, v[1].p)
            }
            n => (0..n).all(|k| {
                orientation_eps(v[k].p, v[(k + 1) % n].p, p, eps) != Orientation::Clockwise
            }),
        }
    }
}

/// Pair a flat coordinate list `[x1, y1, x2, y2, ...]` into points.
///
/// A trailing unpaired coordinate is ignored; callers validate shape.
pub fn points_from_flat(coords: &[f64]) -> Vec<Vector2<f64>> {
    coords
        .chunks_exact(2)
        .map(|c| Vector2::new(c[0], c[1]))
        .collect()
}

/// Hull of a flat coordinate list, labels `P1..Pn` by pair position.
#[inline]
pub fn compute_convex_hull(coords: &[f64]) -> Hull {
    convex_hull_labeled(&points_from_flat(coords))
}

/// Hull of a point slice, labels `P1..Pn` by slice position.
#[inline]
pub fn convex_hull_labeled(points: &[Vector2<f64>]) -> Hull {
    convex_hull_with(GeomCfg::default(), points)
}

/// Hull of a point slice with explicit tolerances.
pub fn convex_hull_with(cfg: GeomCfg, points: &[Vector2<f64>]) -> Hull {
    let indexed: Vec<IndexedPoint> = points
        .iter()
        .enumerate()
        .map(|(i, p)| IndexedPoint::new(i + 1, *p))
        .collect();
    hull_of_indexed(cfg, indexed)
}

/// Hull of already-labelled points (labels are kept as given).
pub fn hull_of_indexed(cfg: GeomCfg, mut pts: Vec<IndexedPoint>) -> Hull {
    // Stable sort keeps the first occurrence of each coordinate in front.
    pts.sort_by(|a, b| cmp_lex(&a.p, &b.p));
    pts.dedup_by(|later, earlier| later.p == earlier.p);

    let distinct = pts.len();
    let vertices = if distinct < 3 {
        pts
    } else {
        monotone_chain(&pts, cfg.eps_orient)
    };
    Hull {
        kind: HullKind::from_vertex_count(vertices.len()),
        vertices,
        distinct,
    }
}

/// Lower and upper chains over lexicographically sorted, distinct points.
fn monotone_chain(sorted: &[IndexedPoint], eps: f64) -> Vec<IndexedPoint> {
    let mut lower: Vec<IndexedPoint> = Vec::with_capacity(sorted.len());
    for p in sorted {
        push_ccw(&mut lower, *p, eps);
    }
    let mut upper: Vec<IndexedPoint> = Vec::with_capacity(sorted.len());
    for p in sorted.iter().rev() {
        push_ccw(&mut upper, *p, eps);
    }
    // Both chains end where the other starts.
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

#[inline]
fn push_ccw(chain: &mut Vec<IndexedPoint>, p: IndexedPoint, eps: f64) {
    while chain.len() >= 2
        && !orientation_eps(chain[chain.len() - 2].p, chain[chain.len() - 1].p, p.p, eps)
            .is_ccw()
    {
        chain.pop();
    }
    chain.push(p);
}
