pub mod collision;
pub mod math;
pub mod shape;

pub mod prelude {
    pub use super::collision::{
        closest_point_on_convex, resolve_penetration, test_convex_vs_convex,
        test_point_in_convex, GjkResult, MinkowskiDifferencePoint, Penetration, QueryConfig,
        QueryConfigBuilder, QueryContext, QueryError, Reason, Simplex,
    };
    pub use super::math::{point::Point, segment::Segment, vector::Vector, FloatNum};
    pub use super::shape::{convex_hull, farthest_point, ConvexPolygon, SupportMap, Transform};
}
