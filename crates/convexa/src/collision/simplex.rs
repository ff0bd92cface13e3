use std::fmt::{Debug, Display};

use super::barycentric::{classify_segment, classify_triangle, SegmentRegion, TriangleRegion};
use crate::math::{point::Point, vector::Vector, FloatNum};

/// Vertex of a simplex, either a plain point or a Minkowski difference point
/// that remembers where it came from.
pub trait SimplexVertex: Clone + Debug {
    fn position(&self) -> Point;

    /// affine blend `self * u + other * v`
    fn blend(&self, u: FloatNum, other: &Self, v: FloatNum) -> Self;
}

impl SimplexVertex for Point {
    fn position(&self) -> Point {
        *self
    }

    fn blend(&self, u: FloatNum, other: &Self, v: FloatNum) -> Self {
        Point::blend(self, u, other, v)
    }
}

/// Up to three vertices, vertices are appended in the order they were found.
#[derive(Clone, Debug, PartialEq)]
pub enum Simplex<V> {
    Point([V; 1]),
    Segment([V; 2]),
    Triangle([V; 3]),
}

impl<V: SimplexVertex> Simplex<V> {
    pub fn len(&self) -> usize {
        self.vertices().len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn vertices(&self) -> &[V] {
        match self {
            Simplex::Point(vertices) => vertices,
            Simplex::Segment(vertices) => vertices,
            Simplex::Triangle(vertices) => vertices,
        }
    }

    pub fn positions(&self) -> Vec<Point> {
        self.vertices().iter().map(V::position).collect()
    }

    /// compares positions only
    pub fn contains(&self, vertex: &V) -> bool {
        let position = vertex.position();
        self.vertices().iter().any(|v| v.position() == position)
    }
}

impl<V: SimplexVertex> Display for Simplex<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, vertex) in self.vertices().iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", vertex.position())?;
        }
        f.write_str("]")
    }
}

/// Sub simplex that keeps only the feature closest to the target, with the
/// next search direction.
#[derive(Clone, Debug)]
pub(crate) enum Evolution<V> {
    /// direction is `target - vertex`
    Vertex { vertex: V, direction: Vector },
    Edge {
        vertices: [V; 2],
        closest_point: Point,
        direction: Vector,
    },
    /// target lies inside the triangle
    Interior([V; 3]),
}

impl<V: SimplexVertex> Evolution<V> {
    pub(crate) fn closest_point(&self, target: &Point) -> Point {
        match self {
            Evolution::Vertex { vertex, .. } => vertex.position(),
            Evolution::Edge { closest_point, .. } => *closest_point,
            Evolution::Interior(_) => *target,
        }
    }

    pub(crate) fn direction(&self) -> Vector {
        match self {
            Evolution::Vertex { direction, .. } | Evolution::Edge { direction, .. } => *direction,
            Evolution::Interior(_) => Vector::ZERO,
        }
    }

    pub(crate) fn into_simplex(self) -> Simplex<V> {
        match self {
            Evolution::Vertex { vertex, .. } => Simplex::Point([vertex]),
            Evolution::Edge { vertices, .. } => Simplex::Segment(vertices),
            Evolution::Interior(vertices) => Simplex::Triangle(vertices),
        }
    }
}

// perpendicular of the edge, turned to face the target
fn edge_direction(a: &Point, b: &Point, target: &Point) -> Vector {
    let direction = Vector::from((b, a)).rotate_left();
    if direction * Vector::from((a, target)) < 0. {
        -direction
    } else {
        direction
    }
}

fn evolve_edge<V: SimplexVertex>(a: V, b: V, target: &Point, u: FloatNum, v: FloatNum) -> Evolution<V> {
    let (start, end) = (a.position(), b.position());
    Evolution::Edge {
        closest_point: start.blend(u, &end, v),
        direction: edge_direction(&start, &end, target),
        vertices: [a, b],
    }
}

/// Reduces the simplex to the feature of it closest to `target`.
pub(crate) fn evolve<V: SimplexVertex>(simplex: Simplex<V>, target: &Point) -> Evolution<V> {
    match simplex {
        Simplex::Point([a]) => {
            let direction = (a.position(), *target).into();
            Evolution::Vertex {
                vertex: a,
                direction,
            }
        }
        Simplex::Segment([a, b]) => {
            let (start, end) = (a.position(), b.position());
            match classify_segment(&start, &end, target) {
                // a tie on the end points keeps the edge
                SegmentRegion::A if !is_on_edge_plane(&start, &end, target) => Evolution::Vertex {
                    direction: (start, *target).into(),
                    vertex: a,
                },
                SegmentRegion::B if !is_on_edge_plane(&end, &start, target) => Evolution::Vertex {
                    direction: (end, *target).into(),
                    vertex: b,
                },
                SegmentRegion::A => evolve_edge(a, b, target, 1., 0.),
                SegmentRegion::B => evolve_edge(a, b, target, 0., 1.),
                SegmentRegion::Edge(u, v) => evolve_edge(a, b, target, u, v),
            }
        }
        Simplex::Triangle([a, b, c]) => {
            let (pa, pb, pc) = (a.position(), b.position(), c.position());
            match classify_triangle(&pa, &pb, &pc, target) {
                TriangleRegion::A => Evolution::Vertex {
                    direction: (pa, *target).into(),
                    vertex: a,
                },
                TriangleRegion::B => Evolution::Vertex {
                    direction: (pb, *target).into(),
                    vertex: b,
                },
                TriangleRegion::C => Evolution::Vertex {
                    direction: (pc, *target).into(),
                    vertex: c,
                },
                TriangleRegion::BC(u, v) => evolve_edge(b, c, target, u, v),
                TriangleRegion::CA(u, v) => evolve_edge(c, a, target, u, v),
                TriangleRegion::AB(u, v) => evolve_edge(a, b, target, u, v),
                TriangleRegion::Interior => Evolution::Interior([a, b, c]),
            }
        }
    }
}

// target projects exactly onto `vertex`, so the segment weight is zero and not negative
fn is_on_edge_plane(vertex: &Point, other: &Point, target: &Point) -> bool {
    let edge = Vector::from((vertex, other));
    !edge.is_zero() && Vector::from((vertex, target)) * edge == 0.
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: FloatNum, y: FloatNum) -> Point {
        (x, y).into()
    }

    #[test]
    fn test_evolve_point() {
        let evolution = evolve(Simplex::Point([point(3., 4.)]), &Point::ORIGIN);
        assert_eq!(evolution.direction(), (-3., -4.).into());
        assert_eq!(evolution.closest_point(&Point::ORIGIN), point(3., 4.));
    }

    #[test]
    fn test_evolve_segment_keeps_edge() {
        let simplex = Simplex::Segment([point(-5., 2.), point(5., 2.)]);
        let evolution = evolve(simplex, &Point::ORIGIN);

        assert_eq!(evolution.closest_point(&Point::ORIGIN), point(0., 2.));
        let direction = evolution.direction();
        assert_eq!(direction.x(), 0.);
        assert!(direction.y() < 0.);
        assert!(matches!(evolution.into_simplex(), Simplex::Segment(_)));
    }

    #[test]
    fn test_evolve_segment_drops_to_vertex() {
        let simplex = Simplex::Segment([point(1., 1.), point(5., 1.)]);
        let evolution = evolve(simplex, &Point::ORIGIN);

        assert_eq!(evolution.closest_point(&Point::ORIGIN), point(1., 1.));
        assert_eq!(evolution.direction(), (-1., -1.).into());
        assert_eq!(evolution.into_simplex(), Simplex::Point([point(1., 1.)]));
    }

    #[test]
    fn test_evolve_triangle_interior() {
        let simplex = Simplex::Triangle([point(-1., -1.), point(3., -1.), point(-1., 3.)]);
        let evolution = evolve(simplex, &Point::ORIGIN);
        assert!(matches!(evolution, Evolution::Interior(_)));
        assert!(evolution.direction().is_zero());
    }

    #[test]
    fn test_evolve_triangle_edge() {
        let simplex = Simplex::Triangle([point(5., -5.), point(-15., 5.), point(5., 5.)]);
        let evolution = evolve(simplex.clone(), &Point::ORIGIN);
        assert!(matches!(evolution, Evolution::Interior(_)));

        let simplex = Simplex::Triangle([point(2., -2.), point(2., 2.), point(6., 0.)]);
        let evolution = evolve(simplex, &Point::ORIGIN);
        assert_eq!(evolution.closest_point(&Point::ORIGIN), point(2., 0.));
        assert_eq!(evolution.direction().normalize(), (-1., 0.).into());
        assert_eq!(
            evolution.into_simplex(),
            Simplex::Segment([point(2., -2.), point(2., 2.)])
        );
    }

    #[test]
    fn test_simplex_contains_by_position() {
        let simplex = Simplex::Segment([point(0., 0.), point(1., 0.)]);
        assert!(simplex.contains(&point(1., 0.)));
        assert!(!simplex.contains(&point(2., 0.)));
        assert_eq!(simplex.len(), 2);
        assert_eq!(simplex.to_string(), "[(0, 0), (1, 0)]");
    }
}
