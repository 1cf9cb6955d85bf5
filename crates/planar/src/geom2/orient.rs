//! Orientation predicate and the inclusive on-segment test.
//!
//! The cross product is taken as
//! `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)`,
//! so a positive value is a clockwise turn and a negative value a
//! counter-clockwise one. Values within `eps` of zero count as collinear.

use nalgebra::Vector2;

use super::types::EPS_ORIENT;

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Orientation::Collinear)
    }
    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Orientation::CounterClockwise)
    }
    pub fn tag(self) -> &'static str {
        match self {
            Orientation::Collinear => "collinear",
            Orientation::Clockwise => "clockwise",
            Orientation::CounterClockwise => "counter_clockwise",
        }
    }
}

#[inline]
fn turn_value(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> f64 {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

/// Orientation of `(p, q, r)` with the default absolute tolerance `1e-9`.
#[inline]
pub fn orientation(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> Orientation {
    orientation_eps(p, q, r, EPS_ORIENT)
}

/// Orientation of `(p, q, r)`; `|value| < eps` is collinear.
///
/// The tolerance is absolute, not scaled by the coordinates.
pub fn orientation_eps(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>, eps: f64) -> Orientation {
    let val = turn_value(p, q, r);
    if val.abs() < eps {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Whether `q` lies in the closed bounding box of `p` and `r`.
///
/// Only meaningful as "q on segment pr" once the triple is known collinear.
#[inline]
pub fn on_segment(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> bool {
    p.x.min(r.x) <= q.x && q.x <= p.x.max(r.x) && p.y.min(r.y) <= q.y && q.y <= p.y.max(r.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn left_turn_is_ccw() {
        let o = orientation(vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0]);
        assert_eq!(o, Orientation::CounterClockwise);
        let o = orientation(vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, -1.0]);
        assert_eq!(o, Orientation::Clockwise);
    }

    #[test]
    fn accessors_agree_with_variant() {
        let cases = [
            (vector![1.0, 1.0], Orientation::CounterClockwise, "counter_clockwise"),
            (vector![1.0, -1.0], Orientation::Clockwise, "clockwise"),
            (vector![2.0, 0.0], Orientation::Collinear, "collinear"),
        ];
        for (r, want, tag) in cases {
            let o = orientation(vector![0.0, 0.0], vector![1.0, 0.0], r);
            assert_eq!(o, want);
            assert_eq!(o.tag(), tag);
            assert_eq!(o.is_ccw(), want == Orientation::CounterClockwise);
            assert_eq!(o.is_collinear(), want == Orientation::Collinear);
        }
    }

    #[test]
    fn tolerance_is_absolute() {
        // Off the line by 1e-12: collinear at unit scale.
        let o = orientation(vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 1e-12]);
        assert!(o.is_collinear());
        // Same relative offset at 1e6 scale exceeds the absolute tolerance.
        let o = orientation(vector![0.0, 0.0], vector![1e6, 0.0], vector![2e6, 1e-6]);
        assert!(!o.is_collinear());
        // A looser tolerance brings it back.
        let o = orientation_eps(vector![0.0, 0.0], vector![1e6, 0.0], vector![2e6, 1e-6], 10.0);
        assert!(o.is_collinear());
    }

    #[test]
    fn on_segment_is_inclusive() {
        let p = vector![0.0, 0.0];
        let r = vector![2.0, 2.0];
        assert!(on_segment(p, vector![0.0, 0.0], r));
        assert!(on_segment(p, vector![1.0, 1.0], r));
        assert!(on_segment(r, vector![2.0, 2.0], p));
        assert!(!on_segment(p, vector![3.0, 3.0], r));
    }
}
