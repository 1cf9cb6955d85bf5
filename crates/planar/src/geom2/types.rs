//! Basic 2D types and tolerances shared by the predicates, the intersection
//! engine and the hull builder.
//!
//! - `GeomCfg`: centralizes the absolute epsilons for orientation and for the
//!   line-line determinant.
//! - `Segment`: ordered endpoint pair.
//! - `IndexedPoint`: point plus its 1-based input label (presentation only).
//!
//! Points are plain `nalgebra::Vector2<f64>`; equality on them is exact.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// Default absolute tolerance for the orientation cross product.
pub const EPS_ORIENT: f64 = 1e-9;
/// Default absolute tolerance for the line-line denominator.
pub const EPS_DENOM: f64 = 1e-9;

/// Geometry configuration (tolerances).
///
/// Both tolerances are absolute. Inputs with very large or very small
/// coordinate magnitudes can be misclassified near collinearity; pick a
/// different absolute value here if the working scale is known.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_orient: f64,
    pub eps_denom: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_orient: EPS_ORIENT,
            eps_denom: EPS_DENOM,
        }
    }
}

impl GeomCfg {
    /// Same tolerance for both checks.
    #[inline]
    pub fn uniform(eps: f64) -> Self {
        Self {
            eps_orient: eps,
            eps_denom: eps,
        }
    }
}

/// Segment between two endpoints. Geometrically undirected; `p == q` marks a
/// degenerate (point) segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p: Vector2<f64>,
    pub q: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(p: Vector2<f64>, q: Vector2<f64>) -> Self {
        Self { p, q }
    }
    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Vector2::new(x1, y1), Vector2::new(x2, y2))
    }
    /// Both endpoints coincide exactly.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p == self.q
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.q, self.p)
    }
}

/// Point with the 1-based position it had in the caller's input.
///
/// The label never takes part in sorting or hull membership.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexedPoint {
    pub index: usize,
    pub p: Vector2<f64>,
}

impl IndexedPoint {
    #[inline]
    pub fn new(index: usize, p: Vector2<f64>) -> Self {
        Self { index, p }
    }
    /// Presentation label, e.g. `P3`.
    pub fn label(&self) -> String {
        format!("P{}", self.index)
    }
}

/// Lexicographic order by x, then y. Inputs are assumed finite.
#[inline]
pub(crate) fn cmp_lex(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}
