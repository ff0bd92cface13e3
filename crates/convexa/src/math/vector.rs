use super::{point::Point, segment::Segment, FloatNum};
use std::{
    fmt::Display,
    ops::{Add, AddAssign, BitXor, Div, Mul, Neg, Not, Shr, Sub, SubAssign},
};

/// Direction or displacement in the plane.
///
/// Every operator returns a new value, the only in-place helpers are crate private.
#[derive(Clone, Debug, Copy, Default)]
pub struct Vector {
    pub(crate) x: FloatNum,
    pub(crate) y: FloatNum,
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("{{ x: {}, y: {} }}", self.x, self.y))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        (self.x() - other.x()).abs() < FloatNum::EPSILON
            && (self.y() - other.y()).abs() < FloatNum::EPSILON
    }
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0., 0.);

    pub const X_AXIS: Vector = Vector::new(1., 0.);

    pub const Y_AXIS: Vector = Vector::new(0., 1.);

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
    pub fn to_point(&self) -> Point {
        (self.x, self.y).into()
    }

    #[inline]
    pub fn abs(&self) -> FloatNum {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn abs_squared(&self) -> FloatNum {
        self.x * self.x + self.y * self.y
    }

    /// unit vector with the same direction, the zero vector stays zero
    pub fn normalize(&self) -> Vector {
        let abs = self.abs();
        if abs == 0. {
            return *self;
        }
        let shrink = abs.recip();
        (self.x * shrink, self.y * shrink).into()
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> FloatNum {
        *self * *other
    }

    /// z component of the 3d cross product
    #[inline]
    pub fn cross(&self, other: &Vector) -> FloatNum {
        *self ^ *other
    }

    /// counter-clockwise rotation by `rad`
    #[inline]
    pub fn rotate(&self, rad: FloatNum) -> Vector {
        if rad == 0. {
            return *self;
        }
        let (s, c) = rad.sin_cos();
        (c * self.x - s * self.y, s * self.x + c * self.y).into()
    }

    /// perpendicular, rotated a quarter turn counter-clockwise
    #[inline]
    pub fn rotate_left(&self) -> Vector {
        (-self.y, self.x).into()
    }

    /// perpendicular, rotated a quarter turn clockwise
    #[inline]
    pub fn rotate_right(&self) -> Vector {
        (self.y, -self.x).into()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0. && self.y == 0.
    }

    #[inline]
    pub(crate) fn negate_self(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
    }
}

impl From<(FloatNum, FloatNum)> for Vector {
    fn from((x, y): (FloatNum, FloatNum)) -> Self {
        Self { x, y }
    }
}

impl From<[FloatNum; 2]> for Vector {
    fn from([x, y]: [FloatNum; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vector> for (FloatNum, FloatNum) {
    fn from(value: Vector) -> Self {
        (value.x, value.y)
    }
}

impl From<&Segment> for Vector {
    fn from(segment: &Segment) -> Self {
        (*segment.start_point(), *segment.end_point()).into()
    }
}

// vector pointing from the first point to the second one
impl From<(Point, Point)> for Vector {
    fn from((p1, p2): (Point, Point)) -> Self {
        (p2.x() - p1.x(), p2.y() - p1.y()).into()
    }
}

impl From<(&Point, &Point)> for Vector {
    fn from((p1, p2): (&Point, &Point)) -> Self {
        (*p1, *p2).into()
    }
}

impl Add for Vector {
    type Output = Self;
    fn add(self, rhs: Vector) -> Self::Output {
        (self.x + rhs.x, self.y + rhs.y).into()
    }
}

impl Add<&Vector> for Vector {
    type Output = Self;
    fn add(self, rhs: &Vector) -> Self::Output {
        self + *rhs
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Vector) -> Self::Output {
        (self.x - rhs.x, self.y - rhs.y).into()
    }
}

impl Sub<&Vector> for Vector {
    type Output = Self;
    fn sub(self, rhs: &Vector) -> Self::Output {
        self - *rhs
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

// dot product
impl Mul for Vector {
    type Output = FloatNum;
    fn mul(self, rhs: Vector) -> Self::Output {
        (self.x * rhs.x) + (self.y * rhs.y)
    }
}

impl Mul<FloatNum> for Vector {
    type Output = Vector;
    fn mul(self, rhs: FloatNum) -> Self::Output {
        (self.x * rhs, self.y * rhs).into()
    }
}

// dividing by zero leaves the vector untouched
impl Div<FloatNum> for Vector {
    type Output = Vector;
    fn div(self, rhs: FloatNum) -> Self::Output {
        if rhs == 0. {
            self
        } else {
            self * rhs.recip()
        }
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self::Output {
        (-self.x, -self.y).into()
    }
}

// clockwise perpendicular
impl Not for Vector {
    type Output = Self;
    fn not(self) -> Self::Output {
        self.rotate_right()
    }
}

// size of the cross product, only z direction exists in 2d
impl BitXor for Vector {
    type Output = FloatNum;
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.x * rhs.y - self.y * rhs.x
    }
}

// size of the projection of lhs on rhs
impl Shr for Vector {
    type Output = FloatNum;
    fn shr(self, rhs: Vector) -> Self::Output {
        let abs = rhs.abs();
        if abs == 0. {
            return 0.;
        }
        self * rhs * abs.recip()
    }
}
