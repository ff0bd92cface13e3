use convexa_macro_tools::Fields;

use super::{hull::convex_hull, support::TransformedVertices, SupportMap, Transform};
use crate::{
    collision::{GjkResult, MinkowskiDifferencePoint, Penetration, QueryContext, QueryError},
    math::{point::Point, segment::Segment, vector::Vector, FloatNum},
};

/// Convex polygon in local coordinates plus the transform that places it.
///
/// Vertices are expected counter-clockwise and convex, [`ConvexPolygon::from_hull`]
/// builds one from any point cloud.
#[derive(Clone, Debug, PartialEq, Fields)]
#[r]
pub struct ConvexPolygon {
    vertices: Vec<Point>,
    #[r(copy)]
    #[w(set)]
    transform: Transform,
}

impl ConvexPolygon {
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self {
            vertices: points.into(),
            transform: Transform::default(),
        }
    }

    pub fn from_hull(points: &[Point]) -> Self {
        Self::new(convex_hull(points))
    }

    pub fn with_transform(mut self, transform: impl Into<Transform>) -> Self {
        self.transform = transform.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// vertices in world space
    pub fn world_vertices(&self) -> Vec<Point> {
        self.vertices
            .iter()
            .map(|vertex| self.transform.apply(vertex))
            .collect()
    }

    /// world space edges, the last one closes the outline
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let vertices = self.world_vertices();
        let count = vertices.len();
        (0..count).map(move |i| (vertices[i], vertices[(i + 1) % count]).into())
    }

    /// average of the world vertices
    pub fn center_point(&self) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum = self
            .world_vertices()
            .iter()
            .fold(Vector::ZERO, |sum, vertex| sum + vertex.to_vector());
        Some((sum / self.vertices.len() as FloatNum).to_point())
    }

    pub fn support_point(&self, direction: &Vector) -> Option<Point> {
        TransformedVertices::new(&self.vertices, self.transform)
            .map(|shape| shape.support_point(direction))
    }

    pub fn closest_point(&self, query: &Point) -> Result<Point, QueryError> {
        QueryContext::default().closest_point_on_convex(&self.world_vertices(), query)
    }

    pub fn contains_point(&self, query: &Point) -> Result<bool, QueryError> {
        self.test_point(query).map(|result| result.result())
    }

    pub fn test_point(&self, query: &Point) -> Result<GjkResult<Point>, QueryError> {
        QueryContext::default().test_point_in_convex(&self.vertices, query, self.transform)
    }

    pub fn test_intersection(
        &self,
        other: &ConvexPolygon,
    ) -> Result<GjkResult<MinkowskiDifferencePoint>, QueryError> {
        QueryContext::default().test_convex_vs_convex(
            &self.vertices,
            &other.vertices,
            self.transform,
            other.transform,
        )
    }

    pub fn intersects(&self, other: &ConvexPolygon) -> Result<bool, QueryError> {
        self.test_intersection(other).map(|result| result.result())
    }

    /// `None` when the polygons are apart, moving `other` by the mtv of the
    /// result separates them.
    pub fn penetration(&self, other: &ConvexPolygon) -> Result<Option<Penetration>, QueryError> {
        let context = QueryContext::default();
        let result = context.test_convex_vs_convex(
            &self.vertices,
            &other.vertices,
            self.transform,
            other.transform,
        )?;
        if !result.result() {
            return Ok(None);
        }
        context
            .resolve_penetration(
                &self.vertices,
                &other.vertices,
                result.simplex(),
                self.transform,
                other.transform,
            )
            .map(Some)
    }
}

impl From<Vec<Point>> for ConvexPolygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(x: FloatNum, y: FloatNum) -> ConvexPolygon {
        ConvexPolygon::new(vec![
            (0., 0.).into(),
            (10., 0.).into(),
            (10., 10.).into(),
            (0., 10.).into(),
        ])
        .with_transform(Vector::new(x, y))
    }

    #[test]
    fn test_contains_point() {
        let polygon = block(5., 5.);
        assert!(polygon.contains_point(&(6., 14.).into()).unwrap());
        assert!(!polygon.contains_point(&(4., 4.).into()).unwrap());
        assert_eq!(polygon.center_point(), Some((10., 10.).into()));
    }

    #[test]
    fn test_edges_close_the_outline() {
        let edges: Vec<Segment> = block(5., 5.).edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(*edges[3].start_point(), (5., 15.).into());
        assert_eq!(*edges[3].end_point(), (5., 5.).into());
        assert_eq!(edges[0].length(), 10.);
        assert_eq!(ConvexPolygon::new(Vec::<Point>::new()).edges().count(), 0);
    }

    #[test]
    fn test_closest_point_in_world_space() {
        let polygon = block(5., 5.);
        assert_eq!(polygon.closest_point(&(0., 10.).into()).unwrap(), (5., 10.).into());
    }

    #[test]
    fn test_penetration_moves_other_out() {
        let a = block(0., 0.);
        let b = block(5., 5.);

        let penetration = a.penetration(&b).unwrap().unwrap();
        assert_eq!(penetration.mtv(), (0., 5.).into());

        let moved = b.clone().with_transform(Vector::new(5., 10.));
        let test = a.test_intersection(&moved).unwrap();
        assert!(test.result());
        assert_ne!(test.reason(), crate::collision::Reason::Containment);

        assert_eq!(a.penetration(&block(30., 0.)).unwrap(), None);
        assert!(!a.intersects(&block(30., 0.)).unwrap());
    }

    #[test]
    fn test_from_hull() {
        let polygon = ConvexPolygon::from_hull(&[
            (10., 10.).into(),
            (0., 0.).into(),
            (4., 6.).into(),
            (10., 0.).into(),
            (0., 10.).into(),
        ]);
        assert_eq!(polygon.vertices().len(), 4);
        assert_eq!(polygon.vertices()[0], (0., 0.).into());
    }

    #[test]
    fn test_empty_polygon() {
        let polygon = ConvexPolygon::new(Vec::<Point>::new());
        assert!(polygon.is_empty());
        assert_eq!(polygon.center_point(), None);
        assert_eq!(polygon.support_point(&Vector::X_AXIS), None);
        assert_eq!(polygon.contains_point(&Point::ORIGIN), Err(QueryError::EmptyShape));
    }
}
