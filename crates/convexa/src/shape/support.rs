use super::Transform;
use crate::math::{point::Point, vector::Vector};

/// Shapes that can answer "which of your points lies farthest along this
/// direction".
pub trait SupportMap {
    fn support_point(&self, direction: &Vector) -> Point;
}

/// Transformed vertex with the largest projection on `direction`, the first
/// one wins a tie.
///
/// Gives `None` for an empty vertex list.
pub fn farthest_point(vertices: &[Point], direction: &Vector, transform: &Transform) -> Option<Point> {
    let (first, rest) = vertices.split_first()?;
    Some(farthest_point_from(first, rest, direction, transform))
}

fn farthest_point_from(first: &Point, rest: &[Point], direction: &Vector, transform: &Transform) -> Point {
    let mut result = transform.apply(first);
    let mut max = result.to_vector() * *direction;
    for vertex in rest {
        let point = transform.apply(vertex);
        let size = point.to_vector() * *direction;
        if size > max {
            max = size;
            result = point;
        }
    }
    result
}

/// Vertex list placed by a transform, never empty.
#[derive(Clone, Copy, Debug)]
pub struct TransformedVertices<'a> {
    first: &'a Point,
    rest: &'a [Point],
    transform: Transform,
}

impl<'a> TransformedVertices<'a> {
    pub fn new(vertices: &'a [Point], transform: Transform) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;
        Some(Self {
            first,
            rest,
            transform,
        })
    }

    pub fn first_vertex(&self) -> Point {
        self.transform.apply(self.first)
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.first)
            .chain(self.rest)
            .map(|vertex| self.transform.apply(vertex))
    }
}

impl SupportMap for TransformedVertices<'_> {
    fn support_point(&self, direction: &Vector) -> Point {
        farthest_point_from(self.first, self.rest, direction, &self.transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            (-1., -1.).into(),
            (1., -1.).into(),
            (1., 1.).into(),
            (-1., 1.).into(),
        ]
    }

    #[test]
    fn test_farthest_point() {
        let transform = Transform::from_translation((5., 0.).into());
        let point = farthest_point(&square(), &(1., 0.2).into(), &transform);
        assert_eq!(point, Some((6., 1.).into()));
    }

    #[test]
    fn test_first_vertex_wins_tie() {
        let point = farthest_point(&square(), &(1., 0.).into(), &Transform::default());
        assert_eq!(point, Some((1., -1.).into()));
    }

    #[test]
    fn test_empty_vertices() {
        assert_eq!(
            farthest_point(&[], &(1., 0.).into(), &Transform::default()),
            None
        );
        assert!(TransformedVertices::new(&[], Transform::default()).is_none());
    }

    #[test]
    fn test_transformed_vertices() {
        let vertices = square();
        let shape = TransformedVertices::new(&vertices, Transform::from_translation((5., 5.).into())).unwrap();
        assert_eq!(shape.first_vertex(), (4., 4.).into());
        assert_eq!(shape.support_point(&(-1., 1.).into()), (4., 6.).into());
        assert_eq!(shape.iter().count(), 4);
    }
}
