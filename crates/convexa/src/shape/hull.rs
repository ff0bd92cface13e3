use std::cmp::Ordering;

use crate::math::{point::Point, vector::Vector, FloatNum};

/// Graham scan, counter-clockwise with the lowest (then leftmost) vertex
/// first.
///
/// Fewer than four vertices come back untouched, whatever their winding.
pub fn convex_hull(vertices: &[Point]) -> Vec<Point> {
    if vertices.len() < 4 {
        return vertices.to_vec();
    }

    let pivot_index = vertices
        .iter()
        .enumerate()
        .fold(0, |lowest, (i, vertex)| {
            let current = &vertices[lowest];
            if vertex.y() < current.y() || (vertex.y() == current.y() && vertex.x() < current.x()) {
                i
            } else {
                lowest
            }
        });
    let pivot = vertices[pivot_index];

    let mut rest: Vec<(FloatNum, FloatNum, Point)> = vertices
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != pivot_index)
        .map(|(_, vertex)| {
            let offset: Vector = (pivot, *vertex).into();
            (pseudo_angle(&offset), offset.abs_squared(), *vertex)
        })
        .collect();

    // counter-clockwise sweep, nearer first on the same ray
    rest.sort_by(|(angle_a, distance_a, _), (angle_b, distance_b, _)| {
        match angle_a.total_cmp(angle_b) {
            Ordering::Equal => distance_a.total_cmp(distance_b),
            ordering => ordering,
        }
    });

    let mut stack = Vec::with_capacity(vertices.len());
    stack.push(pivot);
    for (_, _, current) in rest {
        while let [.., a, b] = stack[..] {
            let turn = Vector::from((a, b)) ^ Vector::from((b, current));
            if turn > 0. {
                break;
            }
            stack.pop();
        }
        stack.push(current);
    }

    stack
}

// monotone in the angle of `offset` over the upper half plane, 0 along +x and
// 2 along -x; equal for offsets on one ray
fn pseudo_angle(offset: &Vector) -> FloatNum {
    let size = offset.x().abs() + offset.y();
    if size == 0. {
        return 0.;
    }
    1. - offset.x() / size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[(FloatNum, FloatNum)]) -> Vec<Point> {
        values.iter().map(|&v| v.into()).collect()
    }

    #[test]
    fn test_square_with_inner_point() {
        let hull = convex_hull(&points(&[
            (0., 0.),
            (10., 0.),
            (10., 10.),
            (0., 10.),
            (5., 5.),
        ]));
        assert_eq!(hull, points(&[(0., 0.), (10., 0.), (10., 10.), (0., 10.)]));
    }

    #[test]
    fn test_small_input_untouched() {
        let triangle = points(&[(0., 0.), (0., 10.), (10., 0.)]);
        assert_eq!(convex_hull(&triangle), triangle);
        assert!(convex_hull(&[]).is_empty());
    }

    #[test]
    fn test_pivot_is_lowest_then_leftmost() {
        let hull = convex_hull(&points(&[(4., 4.), (2., 0.), (0., 0.), (0., 4.)]));
        assert_eq!(hull[0], (0., 0.).into());
        assert_eq!(hull.len(), 4);
    }

    #[test]
    fn test_collinear_points_dropped() {
        let hull = convex_hull(&points(&[
            (0., 0.),
            (5., 0.),
            (10., 0.),
            (10., 10.),
            (5., 10.),
            (0., 10.),
            (0., 5.),
        ]));
        assert_eq!(hull, points(&[(0., 0.), (10., 0.), (10., 10.), (0., 10.)]));
    }

    #[test]
    fn test_duplicates_collapse() {
        let hull = convex_hull(&points(&[
            (0., 0.),
            (0., 0.),
            (3., 0.),
            (3., 0.),
            (0., 3.),
        ]));
        assert_eq!(hull, points(&[(0., 0.), (3., 0.), (0., 3.)]));
    }
}
