use super::{vector::Vector, FloatNum};
use std::{
    fmt::Display,
    ops::{Add, Sub},
};

#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub(crate) x: FloatNum,
    pub(crate) y: FloatNum,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        ((self.x() - other.x()).abs() < FloatNum::EPSILON)
            && ((self.y() - other.y()).abs() < FloatNum::EPSILON)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("({}, {})", self.x, self.y))
    }
}

impl Point {
    pub const ORIGIN: Point = Point::new(0., 0.);

    #[inline]
    pub const fn new(x: FloatNum, y: FloatNum) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> FloatNum {
        self.x
    }

    #[inline]
    pub fn y(&self) -> FloatNum {
        self.y
    }

    #[inline]
    pub fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> FloatNum {
        Vector::from((self, other)).abs()
    }

    /// affine blend `self * u + other * v`, caller keeps `u + v == 1`
    #[inline]
    pub fn blend(&self, u: FloatNum, other: &Point, v: FloatNum) -> Point {
        (self.to_vector() * u + other.to_vector() * v).to_point()
    }
}

impl From<(FloatNum, FloatNum)> for Point {
    fn from((x, y): (FloatNum, FloatNum)) -> Self {
        Point { x, y }
    }
}

impl From<[FloatNum; 2]> for Point {
    fn from([x, y]: [FloatNum; 2]) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (FloatNum, FloatNum) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl Add<Vector> for Point {
    type Output = Self;
    fn add(self, rhs: Vector) -> Self::Output {
        (self.x + rhs.x, self.y + rhs.y).into()
    }
}

impl Add<&Vector> for Point {
    type Output = Self;
    fn add(self, rhs: &Vector) -> Self::Output {
        self + *rhs
    }
}

impl Add<Vector> for &Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Self::Output {
        *self + rhs
    }
}

impl Sub<Vector> for Point {
    type Output = Self;
    fn sub(self, rhs: Vector) -> Self::Output {
        (self.x - rhs.x, self.y - rhs.y).into()
    }
}

impl Sub<&Vector> for Point {
    type Output = Self;
    fn sub(self, rhs: &Vector) -> Self::Output {
        self - *rhs
    }
}
