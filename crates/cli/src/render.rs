//! Text and JSON rendering of core results.
//!
//! Message tables exist for English and Polish. The language is passed in by
//! the caller; there is no process-wide current language.

use clap::ValueEnum;
use planar::{Hull, HullKind, IndexedPoint, Intersection, Vec2};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    #[default]
    En,
    Pl,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

fn pt(p: Vec2<f64>) -> String {
    // `+ 0.0` turns -0.0 into 0.0 so it never prints as "-0.00".
    format!("({:.2}, {:.2})", p.x + 0.0, p.y + 0.0)
}

fn vertex(v: &IndexedPoint) -> String {
    format!("{} {}", v.label(), pt(v.p))
}

fn vertex_list(vs: &[IndexedPoint]) -> String {
    vs.iter().map(vertex).collect::<Vec<_>>().join(", ")
}

/// Human-readable intersection message.
pub fn intersection_text(lang: Lang, r: &Intersection) -> String {
    match (lang, r) {
        (Lang::En, Intersection::NoIntersection) => "Segments do not intersect.".to_string(),
        (Lang::Pl, Intersection::NoIntersection) => "Odcinki nie przecinają się.".to_string(),
        (Lang::En, Intersection::Point(p)) => format!("Segments intersect at point: {}", pt(*p)),
        (Lang::Pl, Intersection::Point(p)) => {
            format!("Odcinki przecinają się w punkcie: {}", pt(*p))
        }
        (Lang::En, Intersection::Overlap(a, b)) => {
            format!("Segments overlap from {} to {}", pt(*a), pt(*b))
        }
        (Lang::Pl, Intersection::Overlap(a, b)) => {
            format!("Odcinki nakładają się na odcinku od {} do {}", pt(*a), pt(*b))
        }
        (Lang::En, Intersection::AllPointsIdentical(p)) => {
            format!("All points are identical: {}", pt(*p))
        }
        (Lang::Pl, Intersection::AllPointsIdentical(p)) => {
            format!("Wszystkie punkty są identyczne: {}", pt(*p))
        }
        (Lang::En, Intersection::DegenerateBothPointPairs) => {
            "Both segments collapse to single points; no segments were given.".to_string()
        }
        (Lang::Pl, Intersection::DegenerateBothPointPairs) => {
            "Podano punkty, nie odcinki.".to_string()
        }
        (Lang::En, Intersection::IntersectsButUnresolved) => {
            "Segments intersect but intersection point could not be found.".to_string()
        }
        (Lang::Pl, Intersection::IntersectsButUnresolved) => {
            "Odcinki przecinają się ale nie udało się znaleźć punktu przecięcia.".to_string()
        }
    }
}

/// Human-readable hull classification with labelled vertices.
pub fn hull_text(lang: Lang, hull: &Hull) -> String {
    let vs = hull.labeled();
    match (lang, hull.kind) {
        (Lang::En, HullKind::Empty) => "No points given.".to_string(),
        (Lang::Pl, HullKind::Empty) => "Nie podano punktów.".to_string(),
        (Lang::En, HullKind::Point) => format!("The convex hull is a point: {}", vertex(&vs[0])),
        (Lang::Pl, HullKind::Point) => format!("Otoczka wypukła to punkt: {}", vertex(&vs[0])),
        (Lang::En, HullKind::Segment) => format!(
            "The convex hull is a segment from {} to {}",
            vertex(&vs[0]),
            vertex(&vs[1])
        ),
        (Lang::Pl, HullKind::Segment) => format!(
            "Otoczka wypukła to odcinek od {} do {}",
            vertex(&vs[0]),
            vertex(&vs[1])
        ),
        (Lang::En, HullKind::Triangle) => {
            format!("The convex hull is a triangle with vertices: {}", vertex_list(&vs))
        }
        (Lang::Pl, HullKind::Triangle) => {
            format!("Otoczka wypukła to trójkąt z wierzchołkami: {}", vertex_list(&vs))
        }
        (Lang::En, HullKind::Quadrilateral) => format!(
            "The convex hull is a quadrilateral with vertices: {}",
            vertex_list(&vs)
        ),
        (Lang::Pl, HullKind::Quadrilateral) => {
            format!("Otoczka wypukła to czworokąt z wierzchołkami: {}", vertex_list(&vs))
        }
        (Lang::En, HullKind::Polygon(n)) => format!(
            "The convex hull is a polygon with {n} vertices: {}",
            vertex_list(&vs)
        ),
        (Lang::Pl, HullKind::Polygon(n)) => format!(
            "Otoczka wypukła to wielokąt o {n} wierzchołkach: {}",
            vertex_list(&vs)
        ),
    }
}

#[derive(Debug, Serialize)]
pub struct IntersectionJson {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap: Option<[[f64; 2]; 2]>,
}

impl From<&Intersection> for IntersectionJson {
    fn from(r: &Intersection) -> Self {
        let overlap = match *r {
            Intersection::Overlap(a, b) => Some([[a.x, a.y], [b.x, b.y]]),
            _ => None,
        };
        Self {
            kind: r.tag(),
            point: r.point().map(|p| [p.x, p.y]),
            overlap,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VertexJson {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize)]
pub struct HullJson {
    pub kind: &'static str,
    pub vertex_count: usize,
    pub vertices: Vec<VertexJson>,
}

impl From<&Hull> for HullJson {
    fn from(h: &Hull) -> Self {
        Self {
            kind: h.kind.tag(),
            vertex_count: h.kind.vertex_count(),
            vertices: h
                .labeled()
                .iter()
                .map(|v| VertexJson {
                    label: v.label(),
                    x: v.p.x,
                    y: v.p.y,
                })
                .collect(),
        }
    }
}
