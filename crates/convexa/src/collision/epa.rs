use convexa_macro_tools::Fields;

use super::{
    barycentric::project_onto_segment,
    error::{Algorithm, QueryError, Trace, TraceStep},
    gjk::advances,
    minkowski::MinkowskiDifferencePoint,
    simplex::{Simplex, SimplexVertex},
    QueryContext,
};
use crate::{
    math::{num::magnitude_scale, point::Point, vector::Vector, FloatNum},
    shape::{SupportMap, Transform, TransformedVertices},
};

/// Edge of a closed polygon nearest to a query point.
#[derive(Clone, Copy, Debug, PartialEq, Fields)]
#[r]
pub struct ClosestEdge {
    distance: FloatNum,
    /// not normalized, faces the query point
    #[r(copy)]
    perpendicular: Vector,
    head: usize,
    tail: usize,
}

/// Edge `(i, i + 1)` with the smallest distance from `query`, the first one
/// wins a tie. Edges of zero length are skipped.
pub fn find_closest_edge(vertices: &[Point], query: &Point) -> Option<ClosestEdge> {
    let len = vertices.len();
    let mut closest: Option<ClosestEdge> = None;

    for (head, a) in vertices.iter().enumerate() {
        let tail = (head + 1) % len;
        let b = &vertices[tail];

        let ab: Vector = (a, b).into();
        let length = ab.abs();
        if length == 0. {
            continue;
        }
        let aq: Vector = (a, query).into();
        let distance = (ab ^ aq).abs() / length;

        if closest.is_some_and(|edge| edge.distance <= distance) {
            continue;
        }

        let mut perpendicular = ab.rotate_left();
        if aq * perpendicular < 0. {
            perpendicular.negate_self();
        }

        closest = Some(ClosestEdge {
            distance,
            perpendicular,
            head,
            tail,
        });
    }

    closest
}

/// Penetration of two intersecting shapes.
///
/// Moving B by `mtv` (or A by `-mtv`) separates them, `normal` points from A
/// towards B. The contact points are the deepest points of each shape.
#[derive(Clone, Debug, PartialEq, Fields)]
#[r]
pub struct Penetration {
    #[r(copy)]
    mtv: Vector,
    #[r(copy)]
    normal: Vector,
    distance: FloatNum,
    polytope: Vec<MinkowskiDifferencePoint>,
    #[r(copy)]
    contact_a: Point,
    #[r(copy)]
    contact_b: Point,
}

impl Penetration {
    fn touching(
        normal: Vector,
        polytope: Vec<MinkowskiDifferencePoint>,
        contact: MinkowskiDifferencePoint,
    ) -> Self {
        Self {
            mtv: Vector::ZERO,
            normal,
            distance: 0.,
            polytope,
            contact_a: contact.point_a(),
            contact_b: contact.point_b(),
        }
    }
}

fn center_point(polytope: &[MinkowskiDifferencePoint]) -> Point {
    let sum = polytope
        .iter()
        .fold(Vector::ZERO, |sum, vertex| sum + vertex.value());
    (sum / polytope.len() as FloatNum).to_point()
}

impl QueryContext {
    /// Expands the simplex of a successful `test_convex_vs_convex` into the
    /// penetration of the two shapes.
    ///
    /// A point or segment simplex means the shapes only touch, unless a
    /// triangle can still be grown out of the segment.
    pub fn resolve_penetration(
        &self,
        a: &[Point],
        b: &[Point],
        simplex: &Simplex<MinkowskiDifferencePoint>,
        transform_a: Transform,
        transform_b: Transform,
    ) -> Result<Penetration, QueryError> {
        let shape_a = TransformedVertices::new(a, transform_a).ok_or(QueryError::EmptyShape)?;
        let shape_b = TransformedVertices::new(b, transform_b).ok_or(QueryError::EmptyShape)?;

        let compute_support_point = |direction: Vector| {
            MinkowskiDifferencePoint::new(
                shape_a.support_point(&direction),
                shape_b.support_point(&-direction),
            )
        };

        let epsilon = self.config().epsilon();

        let polytope = match simplex {
            Simplex::Triangle(vertices) => vertices.to_vec(),
            Simplex::Segment([head, tail]) => {
                let start = head.to_point();
                let normal = Vector::from((start, tail.to_point())).rotate_left();

                let grown = [normal, -normal].into_iter().find_map(|direction| {
                    let support = compute_support_point(direction);
                    advances(&start, &support.to_point(), &direction, epsilon)
                        .then_some(support)
                });

                match grown {
                    Some(support) => vec![*head, *tail, support],
                    None => {
                        let (u, v) = project_onto_segment(&start, &tail.to_point(), &Point::ORIGIN);
                        let contact = head.blend(u, tail, v);
                        log::debug!("epa on a flat segment, shapes touch at {contact}");
                        return Ok(Penetration::touching(
                            normal.normalize(),
                            vec![*head, *tail],
                            contact,
                        ));
                    }
                }
            }
            Simplex::Point([vertex]) => {
                log::debug!("epa on a single point, shapes touch at {vertex}");
                return Ok(Penetration::touching(Vector::ZERO, vec![*vertex], *vertex));
            }
        };

        self.expand_polytope(polytope, compute_support_point)
    }

    fn expand_polytope(
        &self,
        mut polytope: Vec<MinkowskiDifferencePoint>,
        compute_support_point: impl Fn(Vector) -> MinkowskiDifferencePoint,
    ) -> Result<Penetration, QueryError> {
        let max_iterations = self.config().max_epa_iterations();
        let tolerance = self.config().epa_tolerance();
        let epsilon = self.config().epsilon();

        let positions = |polytope: &[MinkowskiDifferencePoint]| -> Vec<Point> {
            polytope.iter().map(MinkowskiDifferencePoint::to_point).collect()
        };

        let mut trace = Trace::new(positions(&polytope));

        for iteration in 0..max_iterations {
            let vertices = positions(&polytope);
            let Some(edge) = find_closest_edge(&vertices, &Point::ORIGIN) else {
                log::error!("epa polytope collapsed, {trace}");
                return Err(QueryError::DegeneratePolytope {
                    trace: Box::new(trace),
                });
            };

            let head = polytope[edge.head];
            let tail = polytope[edge.tail];

            // the origin sits on the edge, only the rest of the polytope tells outside from inside
            let scale = magnitude_scale([head.x(), head.y(), tail.x(), tail.y()]);
            let normal = if edge.distance <= epsilon * scale {
                let normal = edge.perpendicular.normalize();
                let inward: Vector = (head.to_point(), center_point(&polytope)).into();
                if inward * normal > 0. {
                    -normal
                } else {
                    normal
                }
            } else {
                -edge.perpendicular.normalize()
            };

            let support = compute_support_point(normal);
            let projection = support.value() * normal;

            log::trace!(
                "epa #{iteration}: edge {} -> {} distance {} normal {normal} support {}",
                head.to_point(),
                tail.to_point(),
                edge.distance,
                support.to_point()
            );
            trace.push(TraceStep {
                vertices,
                direction: normal,
                closest_point: None,
                support_point: Some(support.to_point()),
            });

            if (projection - edge.distance).abs() < tolerance || support == head || support == tail {
                let (u, v) = project_onto_segment(&head.to_point(), &tail.to_point(), &Point::ORIGIN);
                let contact = head.blend(u, &tail, v);
                let distance = edge.distance;

                log::debug!("epa finished after {iteration} iterations, depth {distance}");
                return Ok(Penetration {
                    mtv: normal * distance,
                    normal,
                    distance,
                    polytope,
                    contact_a: contact.point_a(),
                    contact_b: contact.point_b(),
                });
            }

            polytope.insert(edge.tail, support);
        }

        Err(QueryError::iteration_limit(
            Algorithm::Epa,
            max_iterations,
            trace,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Vec<Point> {
        vec![(0., 0.).into(), (10., 0.).into(), (10., 10.).into(), (0., 10.).into()]
    }

    fn translate(x: FloatNum, y: FloatNum) -> Transform {
        Transform::from_translation((x, y).into())
    }

    fn penetration(offset_b: (FloatNum, FloatNum)) -> Penetration {
        let context = QueryContext::default();
        let transform_b = translate(offset_b.0, offset_b.1);
        let gjk = context
            .test_convex_vs_convex(&block(), &block(), translate(0., 0.), transform_b)
            .unwrap();
        assert!(gjk.result());
        context
            .resolve_penetration(
                &block(),
                &block(),
                gjk.simplex(),
                translate(0., 0.),
                transform_b,
            )
            .unwrap()
    }

    #[test]
    fn test_find_closest_edge() {
        let square: Vec<Point> = vec![
            (-2., -1.).into(),
            (2., -1.).into(),
            (2., 3.).into(),
            (-2., 3.).into(),
        ];

        let edge = find_closest_edge(&square, &Point::ORIGIN).unwrap();
        assert_eq!(edge.distance(), 1.);
        assert_eq!((edge.head(), edge.tail()), (0, 1));
        assert_eq!(edge.perpendicular().normalize(), (0., 1.).into());

        // clockwise winding flips the perpendicular back toward the query
        let clockwise: Vec<Point> = square.iter().rev().copied().collect();
        let edge = find_closest_edge(&clockwise, &Point::ORIGIN).unwrap();
        assert_eq!(edge.distance(), 1.);
        assert_eq!((edge.head(), edge.tail()), (2, 3));
        assert_eq!(edge.perpendicular().normalize(), (0., 1.).into());
    }

    #[test]
    fn test_find_closest_edge_tie_keeps_first() {
        let square: Vec<Point> = vec![
            (-1., -1.).into(),
            (1., -1.).into(),
            (1., 1.).into(),
            (-1., 1.).into(),
        ];
        let edge = find_closest_edge(&square, &Point::ORIGIN).unwrap();
        assert_eq!((edge.head(), edge.tail()), (0, 1));
        assert!(find_closest_edge(&[Point::ORIGIN, Point::ORIGIN], &Point::ORIGIN).is_none());
    }

    #[test]
    fn test_overlapping_blocks() {
        let penetration = penetration((5., 5.));

        assert_eq!(penetration.mtv(), (0., 5.).into());
        assert_eq!(penetration.normal(), (0., 1.).into());
        assert_eq!(penetration.distance(), 5.);
        assert_eq!(penetration.contact_a(), (7.5, 10.).into());
        assert_eq!(penetration.contact_b(), (7.5, 5.).into());
    }

    #[test]
    fn test_shallow_overlap_along_x() {
        let penetration = penetration((9., 2.));

        assert!((penetration.distance() - 1.).abs() < 1e-9);
        assert_eq!(penetration.normal(), (1., 0.).into());
        assert!((penetration.contact_a().x() - 10.).abs() < 1e-9);
        assert!((penetration.contact_b().x() - 9.).abs() < 1e-9);
    }

    #[test]
    fn test_touching_segment() {
        let context = QueryContext::default();
        let gjk = context
            .test_convex_vs_convex(&block(), &block(), translate(0., 0.), translate(10., 3.))
            .unwrap();
        assert!(gjk.result());

        let penetration = context
            .resolve_penetration(
                &block(),
                &block(),
                gjk.simplex(),
                translate(0., 0.),
                translate(10., 3.),
            )
            .unwrap();

        assert_eq!(penetration.distance(), 0.);
        assert!(penetration.mtv().is_zero());
        assert_eq!(penetration.normal().abs(), 1.);
        assert!((penetration.contact_a().x() - 10.).abs() < 1e-9);
    }

    #[test]
    fn test_touching_vertex() {
        let context = QueryContext::default();
        let vertex = MinkowskiDifferencePoint::new((10., 0.).into(), (10., 0.).into());

        let penetration = context
            .resolve_penetration(
                &block(),
                &block(),
                &Simplex::Point([vertex]),
                translate(0., 0.),
                translate(10., 0.),
            )
            .unwrap();

        assert_eq!(penetration.distance(), 0.);
        assert!(penetration.normal().is_zero());
        assert_eq!(penetration.contact_a(), (10., 0.).into());
        assert_eq!(penetration.polytope().len(), 1);
    }

    #[test]
    fn test_epa_limit_is_fatal() {
        use crate::collision::{config::QueryConfigBuilder, QueryConfig};

        let config: QueryConfig = QueryConfigBuilder::new().max_epa_iterations(0).into();
        let context = QueryContext::new(config);
        let gjk = QueryContext::default()
            .test_convex_vs_convex(&block(), &block(), translate(0., 0.), translate(5., 5.))
            .unwrap();

        let error = context
            .resolve_penetration(
                &block(),
                &block(),
                gjk.simplex(),
                translate(0., 0.),
                translate(5., 5.),
            )
            .unwrap_err();
        assert!(matches!(
            error,
            QueryError::IterationLimitExceeded {
                algorithm: Algorithm::Epa,
                ..
            }
        ));
    }
}
