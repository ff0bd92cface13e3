use std::fmt::Display;

use convexa_macro_tools::Fields;

use super::{
    barycentric::{project_onto_segment, project_onto_triangle},
    error::{Algorithm, QueryError, Trace, TraceStep},
    minkowski::MinkowskiDifferencePoint,
    simplex::{evolve, Evolution, Simplex, SimplexVertex},
    QueryContext,
};
use crate::{
    math::{
        num::{is_nearly_zero, is_non_negative, magnitude_scale},
        point::Point,
        vector::Vector,
        FloatNum,
    },
    shape::{SupportMap, Transform, TransformedVertices},
};

/// Why a GJK run stopped.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Reason {
    VertexOverlap,
    EdgeOverlap,
    Containment,
    VertexOrEdgeOverlap,
    RepeatedSupportPoint,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::VertexOverlap => "vertex overlap",
            Reason::EdgeOverlap => "edge overlap",
            Reason::Containment => "containment",
            Reason::VertexOrEdgeOverlap => "vertex or edge overlap",
            Reason::RepeatedSupportPoint => "repeated support point",
        }
    }
}

impl Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a GJK run.
///
/// `closest_point` is the point of the shape nearest to the target, it is
/// the target itself when `result` is true.
#[derive(Clone, Debug, Fields)]
#[r]
pub struct GjkResult<V> {
    result: bool,
    simplex: Simplex<V>,
    #[r(copy)]
    reason: Reason,
    #[r(copy)]
    direction: Vector,
    #[r(copy)]
    closest_point: Point,
    support_point: Option<V>,
}

impl<V> GjkResult<V> {
    pub fn into_simplex(self) -> Simplex<V> {
        self.simplex
    }
}

// support point moved past the current feature along `direction`
pub(crate) fn advances(from: &Point, support: &Point, direction: &Vector, epsilon: FloatNum) -> bool {
    let scale = magnitude_scale([from.x(), from.y(), support.x(), support.y()]);
    Vector::from((from, support)) * *direction > epsilon * direction.abs() * scale
}

impl<V: SimplexVertex> Evolution<V> {
    fn vertices(&self) -> &[V] {
        match self {
            Evolution::Vertex { vertex, .. } => std::slice::from_ref(vertex),
            Evolution::Edge { vertices, .. } => vertices,
            Evolution::Interior(vertices) => vertices,
        }
    }

    // an interior triangle has nothing left to grow into and comes back as is
    fn grow(self, support: V) -> Simplex<V> {
        match self {
            Evolution::Vertex { vertex, .. } => Simplex::Segment([vertex, support]),
            Evolution::Edge {
                vertices: [a, b], ..
            } => Simplex::Triangle([a, b, support]),
            Evolution::Interior(vertices) => Simplex::Triangle(vertices),
        }
    }
}

struct Gjk<F> {
    target: Point,
    compute_support_point: F,
    epsilon: FloatNum,
    algorithm: Algorithm,
    max_iterations: usize,
}

impl<V, F> Gjk<F>
where
    V: SimplexVertex,
    F: Fn(Vector) -> V,
{
    fn finish(
        &self,
        result: bool,
        reason: Reason,
        simplex: Simplex<V>,
        direction: Vector,
        closest_point: Point,
        support_point: Option<V>,
    ) -> GjkResult<V> {
        log::debug!(
            "{} finished with {reason}, simplex {simplex}, closest point {closest_point}",
            self.algorithm
        );
        GjkResult {
            result,
            simplex,
            reason,
            direction,
            closest_point,
            support_point,
        }
    }

    // target on the segment is either on the boundary of the shape or strictly
    // inside of it, only the two sides of the segment can tell
    fn settle_on_segment(&self, a: V, b: V, direction: Vector) -> GjkResult<V> {
        let start = a.position();
        let normal = Vector::from((start, b.position())).rotate_left();
        let left = (self.compute_support_point)(normal);
        let right = (self.compute_support_point)(-normal);

        let left_advances = advances(&start, &left.position(), &normal, self.epsilon);
        let right_advances = advances(&start, &right.position(), &-normal, self.epsilon);

        if left_advances && right_advances {
            self.finish(
                true,
                Reason::Containment,
                Simplex::Triangle([a, b, left.clone()]),
                Vector::ZERO,
                self.target,
                Some(left),
            )
        } else {
            self.finish(
                true,
                Reason::EdgeOverlap,
                Simplex::Segment([a, b]),
                direction,
                self.target,
                Some(left),
            )
        }
    }

    fn is_on_segment(&self, start: &Point, end: &Point) -> bool {
        let edge: Vector = (start, end).into();
        let (u, v) = project_onto_segment(start, end, &self.target);
        let offset = Vector::from((start, &self.target)) ^ edge;
        is_non_negative(u, self.epsilon)
            && is_non_negative(v, self.epsilon)
            && is_nearly_zero(offset, self.epsilon * edge.abs_squared())
    }

    // terminal answer when the target touches or sits inside the current feature
    fn check_containment(&self, evolution: &Evolution<V>) -> Option<GjkResult<V>> {
        let direction = evolution.direction();
        match evolution {
            Evolution::Vertex { vertex, .. } => (vertex.position() == self.target).then(|| {
                self.finish(
                    true,
                    Reason::VertexOverlap,
                    Simplex::Point([vertex.clone()]),
                    direction,
                    self.target,
                    None,
                )
            }),
            Evolution::Edge {
                vertices: [a, b], ..
            } => {
                let (start, end) = (a.position(), b.position());
                if !self.is_on_segment(&start, &end) {
                    return None;
                }
                // support points lie on the boundary, an end point hit is never interior
                if start == self.target || end == self.target {
                    return Some(self.finish(
                        true,
                        Reason::EdgeOverlap,
                        Simplex::Segment([a.clone(), b.clone()]),
                        direction,
                        self.target,
                        None,
                    ));
                }
                Some(self.settle_on_segment(a.clone(), b.clone(), direction))
            }
            Evolution::Interior([a, b, c]) => {
                let weights = project_onto_triangle(
                    &a.position(),
                    &b.position(),
                    &c.position(),
                    &self.target,
                );
                let is_inside = weights.is_some_and(|(u, v, w)| {
                    [u, v, w]
                        .into_iter()
                        .all(|weight| is_non_negative(weight, self.epsilon))
                });
                let reason = if is_inside {
                    Reason::Containment
                } else {
                    Reason::VertexOrEdgeOverlap
                };
                Some(self.finish(
                    true,
                    reason,
                    Simplex::Triangle([a.clone(), b.clone(), c.clone()]),
                    Vector::ZERO,
                    self.target,
                    None,
                ))
            }
        }
    }

    fn run(self, seed: V) -> Result<GjkResult<V>, QueryError> {
        let mut simplex = Simplex::Point([seed]);
        let mut trace = Trace::new(simplex.positions());

        for iteration in 0..self.max_iterations {
            let evolution = evolve(simplex, &self.target);
            let closest_point = evolution.closest_point(&self.target);
            let direction = evolution.direction();

            if let Some(result) = self.check_containment(&evolution) {
                return Ok(result);
            }

            if direction.is_zero() {
                return Ok(self.finish(
                    true,
                    Reason::VertexOrEdgeOverlap,
                    evolution.into_simplex(),
                    direction,
                    closest_point,
                    None,
                ));
            }

            let support_point = (self.compute_support_point)(direction);
            let support = support_point.position();

            log::trace!(
                "{} #{iteration}: closest {closest_point} direction {direction} support {support}",
                self.algorithm
            );
            trace.push(TraceStep {
                vertices: evolution.vertices().iter().map(V::position).collect(),
                direction,
                closest_point: Some(closest_point),
                support_point: Some(support),
            });

            let is_repeated = evolution.vertices().iter().any(|v| v.position() == support);
            if is_repeated || !advances(&closest_point, &support, &direction, self.epsilon) {
                return Ok(self.finish(
                    false,
                    Reason::RepeatedSupportPoint,
                    evolution.into_simplex(),
                    direction,
                    closest_point,
                    Some(support_point),
                ));
            }

            simplex = evolution.grow(support_point);
        }

        Err(QueryError::iteration_limit(
            self.algorithm,
            self.max_iterations,
            trace,
        ))
    }
}

fn gjk<V, F>(
    context: &QueryContext,
    algorithm: Algorithm,
    max_iterations: usize,
    seed: V,
    target: Point,
    compute_support_point: F,
) -> Result<GjkResult<V>, QueryError>
where
    V: SimplexVertex,
    F: Fn(Vector) -> V,
{
    Gjk {
        target,
        compute_support_point,
        epsilon: context.config().epsilon(),
        algorithm,
        max_iterations,
    }
    .run(seed)
}

impl QueryContext {
    /// Nearest point of the convex polygon to `query`, `query` itself when it
    /// lies inside.
    pub fn closest_point_on_convex(
        &self,
        polygon: &[Point],
        query: &Point,
    ) -> Result<Point, QueryError> {
        let shape =
            TransformedVertices::new(polygon, Transform::default()).ok_or(QueryError::EmptyShape)?;
        let result = gjk(
            self,
            Algorithm::ClosestPoint,
            self.config().max_closest_point_iterations(),
            shape.first_vertex(),
            *query,
            |direction| shape.support_point(&direction),
        )?;
        Ok(result.closest_point)
    }

    /// GJK of the query point against the transformed polygon.
    pub fn test_point_in_convex(
        &self,
        polygon: &[Point],
        query: &Point,
        transform: Transform,
    ) -> Result<GjkResult<Point>, QueryError> {
        let shape = TransformedVertices::new(polygon, transform).ok_or(QueryError::EmptyShape)?;
        gjk(
            self,
            Algorithm::Gjk,
            self.config().max_gjk_iterations(),
            shape.first_vertex(),
            *query,
            |direction| shape.support_point(&direction),
        )
    }

    /// GJK of the origin against the Minkowski difference `A - B`, the shapes
    /// intersect exactly when the difference holds the origin.
    pub fn test_convex_vs_convex(
        &self,
        a: &[Point],
        b: &[Point],
        transform_a: Transform,
        transform_b: Transform,
    ) -> Result<GjkResult<MinkowskiDifferencePoint>, QueryError> {
        let shape_a = TransformedVertices::new(a, transform_a).ok_or(QueryError::EmptyShape)?;
        let shape_b = TransformedVertices::new(b, transform_b).ok_or(QueryError::EmptyShape)?;

        let compute_support_point = |direction: Vector| {
            MinkowskiDifferencePoint::new(
                shape_a.support_point(&direction),
                shape_b.support_point(&-direction),
            )
        };

        let seed = compute_support_point(Vector::X_AXIS);
        gjk(
            self,
            Algorithm::Gjk,
            self.config().max_gjk_iterations(),
            seed,
            Point::ORIGIN,
            compute_support_point,
        )
    }
}
