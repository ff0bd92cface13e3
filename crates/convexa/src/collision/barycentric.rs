//! Barycentric projections and the closest point procedures built on them.

use crate::math::{point::Point, vector::Vector, FloatNum};

/// Weights `(u, v)` of `q` projected onto the line through `a` and `b`, so
/// that the projection is `a * u + b * v` and `u + v == 1`.
///
/// A segment of zero length gives `(1, 0)`.
pub fn project_onto_segment(a: &Point, b: &Point, q: &Point) -> (FloatNum, FloatNum) {
    let ab: Vector = (a, b).into();
    let length_squared = ab.abs_squared();
    if length_squared == 0. {
        return (1., 0.);
    }

    let u = Vector::from((q, b)) * ab / length_squared;
    let v = Vector::from((a, q)) * ab / length_squared;
    (u, v)
}

/// Weights `(u, v, w)` of `q` relative to the triangle `a b c`, each one is
/// the signed area of the sub triangle opposite to its vertex over the area
/// of the whole triangle.
///
/// `None` when the triangle has no area.
pub fn project_onto_triangle(
    a: &Point,
    b: &Point,
    c: &Point,
    q: &Point,
) -> Option<(FloatNum, FloatNum, FloatNum)> {
    let area = Vector::from((a, b)) ^ Vector::from((a, c));
    if area == 0. {
        return None;
    }

    let qa: Vector = (q, a).into();
    let qb: Vector = (q, b).into();
    let qc: Vector = (q, c).into();

    let u = (qb ^ qc) / area;
    let v = (qc ^ qa) / area;
    let w = (qa ^ qb) / area;
    Some((u, v, w))
}

pub fn closest_point_on_point(a: &Point, _q: &Point) -> Point {
    *a
}

pub fn closest_point_on_segment(a: &Point, b: &Point, q: &Point) -> Point {
    match classify_segment(a, b, q) {
        SegmentRegion::A => *a,
        SegmentRegion::B => *b,
        SegmentRegion::Edge(u, v) => a.blend(u, b, v),
    }
}

pub fn closest_point_on_triangle(a: &Point, b: &Point, c: &Point, q: &Point) -> Point {
    match classify_triangle(a, b, c, q) {
        TriangleRegion::A => *a,
        TriangleRegion::B => *b,
        TriangleRegion::C => *c,
        TriangleRegion::BC(u, v) => b.blend(u, c, v),
        TriangleRegion::CA(u, v) => c.blend(u, a, v),
        TriangleRegion::AB(u, v) => a.blend(u, b, v),
        TriangleRegion::Interior => *q,
    }
}

/// Voronoi region of a segment the query point falls in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum SegmentRegion {
    A,
    B,
    Edge(FloatNum, FloatNum),
}

pub(crate) fn classify_segment(a: &Point, b: &Point, q: &Point) -> SegmentRegion {
    let (u, v) = project_onto_segment(a, b, q);
    if v <= 0. {
        SegmentRegion::A
    } else if u <= 0. {
        SegmentRegion::B
    } else {
        SegmentRegion::Edge(u, v)
    }
}

/// Voronoi region of a triangle the query point falls in, edge regions carry
/// the segment weights of their edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum TriangleRegion {
    A,
    B,
    C,
    BC(FloatNum, FloatNum),
    CA(FloatNum, FloatNum),
    AB(FloatNum, FloatNum),
    Interior,
}

pub(crate) fn classify_triangle(a: &Point, b: &Point, c: &Point, q: &Point) -> TriangleRegion {
    let (u_ab, v_ab) = project_onto_segment(a, b, q);
    let (u_bc, v_bc) = project_onto_segment(b, c, q);
    let (u_ca, v_ca) = project_onto_segment(c, a, q);

    if u_ca <= 0. && v_ab <= 0. {
        return TriangleRegion::A;
    }
    if u_ab <= 0. && v_bc <= 0. {
        return TriangleRegion::B;
    }
    if u_bc <= 0. && v_ca <= 0. {
        return TriangleRegion::C;
    }

    let Some((u_abc, v_abc, w_abc)) = project_onto_triangle(a, b, c, q) else {
        return classify_flat_triangle(a, b, c, q);
    };

    if u_bc > 0. && v_bc > 0. && u_abc <= 0. {
        return TriangleRegion::BC(u_bc, v_bc);
    }
    if u_ca > 0. && v_ca > 0. && v_abc <= 0. {
        return TriangleRegion::CA(u_ca, v_ca);
    }
    if u_ab > 0. && v_ab > 0. && w_abc <= 0. {
        return TriangleRegion::AB(u_ab, v_ab);
    }

    TriangleRegion::Interior
}

// all three vertices on one line, the nearest edge wins
fn classify_flat_triangle(a: &Point, b: &Point, c: &Point, q: &Point) -> TriangleRegion {
    let candidates = [
        (classify_segment(a, b, q), a, b, 0),
        (classify_segment(b, c, q), b, c, 1),
        (classify_segment(c, a, q), c, a, 2),
    ];

    let mut nearest = TriangleRegion::A;
    let mut min_distance = FloatNum::MAX;
    for (region, start, end, edge) in candidates {
        let closest = match region {
            SegmentRegion::A => *start,
            SegmentRegion::B => *end,
            SegmentRegion::Edge(u, v) => start.blend(u, end, v),
        };
        let distance = Vector::from((q, &closest)).abs_squared();
        if distance >= min_distance {
            continue;
        }
        min_distance = distance;
        nearest = match (edge, region) {
            (0, SegmentRegion::A) | (2, SegmentRegion::B) => TriangleRegion::A,
            (0, SegmentRegion::B) | (1, SegmentRegion::A) => TriangleRegion::B,
            (1, SegmentRegion::B) | (2, SegmentRegion::A) => TriangleRegion::C,
            (0, SegmentRegion::Edge(u, v)) => TriangleRegion::AB(u, v),
            (1, SegmentRegion::Edge(u, v)) => TriangleRegion::BC(u, v),
            (_, SegmentRegion::Edge(u, v)) => TriangleRegion::CA(u, v),
            _ => nearest,
        };
    }
    nearest
}
