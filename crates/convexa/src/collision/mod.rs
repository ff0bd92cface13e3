//! Closest point, intersection and penetration queries on convex polygons.
//!
//! Every query exists twice: as a method of [`QueryContext`], which carries
//! the [`QueryConfig`], and as a free function that runs with the default
//! config.

use convexa_macro_tools::Fields;

use crate::{math::point::Point, shape::Transform};

pub mod barycentric;
pub mod config;
pub mod epa;
pub mod error;
pub mod gjk;
pub mod minkowski;
pub mod simplex;

pub use barycentric::{
    closest_point_on_point, closest_point_on_segment, closest_point_on_triangle,
    project_onto_segment, project_onto_triangle,
};
pub use config::{QueryConfig, QueryConfigBuilder};
pub use epa::{find_closest_edge, ClosestEdge, Penetration};
pub use error::{Algorithm, QueryError, Trace, TraceStep};
pub use gjk::{GjkResult, Reason};
pub use minkowski::{minkowski_difference, MinkowskiDifferencePoint};
pub use simplex::{Simplex, SimplexVertex};

#[derive(Clone, Debug, Default, Fields)]
#[r]
pub struct QueryContext {
    #[w(set)]
    config: QueryConfig,
}

impl QueryContext {
    pub fn new(config: impl Into<QueryConfig>) -> Self {
        Self {
            config: config.into(),
        }
    }
}

pub fn closest_point_on_convex(polygon: &[Point], query: &Point) -> Result<Point, QueryError> {
    QueryContext::default().closest_point_on_convex(polygon, query)
}

pub fn test_point_in_convex(
    polygon: &[Point],
    query: &Point,
    transform: Transform,
) -> Result<GjkResult<Point>, QueryError> {
    QueryContext::default().test_point_in_convex(polygon, query, transform)
}

pub fn test_convex_vs_convex(
    a: &[Point],
    b: &[Point],
    transform_a: Transform,
    transform_b: Transform,
) -> Result<GjkResult<MinkowskiDifferencePoint>, QueryError> {
    QueryContext::default().test_convex_vs_convex(a, b, transform_a, transform_b)
}

pub fn resolve_penetration(
    a: &[Point],
    b: &[Point],
    simplex: &Simplex<MinkowskiDifferencePoint>,
    transform_a: Transform,
    transform_b: Transform,
) -> Result<Penetration, QueryError> {
    QueryContext::default().resolve_penetration(a, b, simplex, transform_a, transform_b)
}
