use std::{
    fmt::Display,
    ops::{Add, Mul, Sub},
};

use convexa_macro_tools::{Deref, Fields};

use super::simplex::SimplexVertex;
use crate::{
    math::{point::Point, vector::Vector, FloatNum},
    shape::{hull::convex_hull, Transform},
};

/// Point of `A - B` that remembers which vertex of each shape produced it.
///
/// Equality only looks at the difference itself. The difference is read only,
/// it always equals `point_a - point_b`.
#[derive(Clone, Copy, Debug, Default, Deref, Fields)]
#[r(copy)]
pub struct MinkowskiDifferencePoint {
    point_a: Point,
    point_b: Point,
    #[deref(ref)]
    value: Vector,
}

impl MinkowskiDifferencePoint {
    pub fn new(point_a: Point, point_b: Point) -> Self {
        (point_a, point_b).into()
    }

    #[inline]
    pub fn to_point(&self) -> Point {
        self.value.to_point()
    }
}

impl Display for MinkowskiDifferencePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} - {})", self.to_point(), self.point_a, self.point_b)
    }
}

impl PartialEq for MinkowskiDifferencePoint {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl From<(Point, Point)> for MinkowskiDifferencePoint {
    fn from((point_a, point_b): (Point, Point)) -> Self {
        Self {
            point_a,
            point_b,
            value: (point_b, point_a).into(),
        }
    }
}

impl Add for MinkowskiDifferencePoint {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            point_a: self.point_a + rhs.point_a.to_vector(),
            point_b: self.point_b + rhs.point_b.to_vector(),
            value: self.value + rhs.value,
        }
    }
}

impl Sub for MinkowskiDifferencePoint {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            point_a: self.point_a - rhs.point_a.to_vector(),
            point_b: self.point_b - rhs.point_b.to_vector(),
            value: self.value - rhs.value,
        }
    }
}

impl Mul<FloatNum> for MinkowskiDifferencePoint {
    type Output = Self;
    fn mul(self, rhs: FloatNum) -> Self::Output {
        Self {
            point_a: (self.point_a.to_vector() * rhs).to_point(),
            point_b: (self.point_b.to_vector() * rhs).to_point(),
            value: self.value * rhs,
        }
    }
}

impl SimplexVertex for MinkowskiDifferencePoint {
    fn position(&self) -> Point {
        self.to_point()
    }

    fn blend(&self, u: FloatNum, other: &Self, v: FloatNum) -> Self {
        *self * u + *other * v
    }
}

/// Outline of `A - B` for both shapes placed by their transforms, counter
/// clockwise.
pub fn minkowski_difference(
    a: &[Point],
    b: &[Point],
    transform_a: &Transform,
    transform_b: &Transform,
) -> Vec<MinkowskiDifferencePoint> {
    let b: Vec<Point> = b.iter().map(|p| transform_b.apply(p)).collect();

    let differences: Vec<MinkowskiDifferencePoint> = a
        .iter()
        .map(|p| transform_a.apply(p))
        .flat_map(|point_a| b.iter().map(move |point_b| (point_a, *point_b).into()))
        .collect();

    let outline = convex_hull(
        &differences
            .iter()
            .map(MinkowskiDifferencePoint::to_point)
            .collect::<Vec<_>>(),
    );

    outline
        .into_iter()
        .filter_map(|point| {
            differences
                .iter()
                .find(|difference| difference.to_point() == point)
                .copied()
        })
        .collect()
}
