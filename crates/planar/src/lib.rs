//! Planar segment intersection and convex hulls.
//!
//! Two independent entry points over `nalgebra::Vector2<f64>` points:
//! - `check_intersection`: classify how two segments meet.
//! - `compute_convex_hull`: monotone-chain hull, classified by vertex count.
//!
//! Everything is a pure function of its inputs. Formatting and localisation
//! of results is left to callers (see the `cli` crate).

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{
    check_intersection, check_intersection_coords, compute_convex_hull, convex_hull_labeled,
    orientation, GeomCfg, Hull, HullKind, IndexedPoint, Intersection, Orientation, Segment,
};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_points, draw_segment_pair, CloudCfg, PointCount, ReplayToken};
    pub use crate::geom2::{
        check_intersection, check_intersection_coords, check_intersection_with,
        compute_convex_hull, convex_hull_labeled, convex_hull_with, on_segment, orientation,
        GeomCfg, Hull, HullKind, IndexedPoint, Intersection, Orientation, Segment,
    };
    pub use nalgebra::Vector2 as Vec2;
}
