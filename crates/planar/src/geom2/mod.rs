//! Planar geometry core: orientation, segment intersection, convex hull.
//!
//! Purpose
//! - Pure, stateless computations over small point sets. No I/O, no global
//!   state; results are language-neutral values a presentation layer renders.
//! - Numerically explicit: one absolute tolerance (`GeomCfg`, default `1e-9`)
//!   for orientation and one for the line-line determinant.
//!
//! Layout
//! - `orient`: orientation predicate and on-segment test (leaf).
//! - `intersect`: segment intersection decision and crossing point.
//! - `hull`: monotone-chain hull and its classification.
//! - `rand`: seeded point clouds for benches and demos.

pub mod hull;
pub mod intersect;
pub mod orient;
pub mod rand;
mod types;

pub use hull::{
    compute_convex_hull, convex_hull_labeled, convex_hull_with, hull_of_indexed, points_from_flat,
    Hull, HullKind,
};
pub use intersect::{
    check_intersection, check_intersection_coords, check_intersection_with, line_intersection,
    segments_intersect, Intersection,
};
pub use orient::{on_segment, orientation, orientation_eps, Orientation};
pub use types::{GeomCfg, IndexedPoint, Segment, EPS_DENOM, EPS_ORIENT};

#[cfg(test)]
mod props;
