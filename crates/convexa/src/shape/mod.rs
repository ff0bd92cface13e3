use std::ops::AddAssign;

use convexa_macro_tools::Fields;

use crate::math::{point::Point, vector::Vector, FloatNum};

pub mod convex;
pub mod hull;
pub mod support;

pub use convex::ConvexPolygon;
pub use hull::convex_hull;
pub use support::{farthest_point, SupportMap, TransformedVertices};

/// Rigid placement of a shape: rotation about the local origin
/// (counter-clockwise, radians), then translation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Fields)]
#[r]
pub struct Transform {
    #[r(copy)]
    translation: Vector,
    rotation: FloatNum,
}

impl From<(Vector, FloatNum)> for Transform {
    fn from((translation, rotation): (Vector, FloatNum)) -> Self {
        Self {
            translation,
            rotation,
        }
    }
}

impl From<Vector> for Transform {
    fn from(translation: Vector) -> Self {
        Self::from_translation(translation)
    }
}

impl AddAssign<&Transform> for Transform {
    fn add_assign(&mut self, rhs: &Self) {
        self.translation += rhs.translation;
        self.rotation += rhs.rotation;
    }
}

impl Transform {
    pub fn new(translation: Vector, rotation: FloatNum) -> Self {
        (translation, rotation).into()
    }

    pub fn from_translation(translation: Vector) -> Self {
        Self {
            translation,
            rotation: 0.,
        }
    }

    pub fn from_rotation(rotation: FloatNum) -> Self {
        Self {
            translation: Vector::ZERO,
            rotation,
        }
    }

    pub fn split(&self) -> (Vector, FloatNum) {
        (self.translation, self.rotation)
    }

    pub fn is_identity(&self) -> bool {
        self.translation.is_zero() && self.rotation == 0.
    }

    /// local vertex to world space
    #[inline]
    pub fn apply(&self, point: &Point) -> Point {
        point.to_vector().rotate(self.rotation).to_point() + self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::pi;

    #[test]
    fn test_rotation_happens_before_translation() {
        let transform = Transform::new((10., 0.).into(), pi());
        let point = transform.apply(&(1., 0.).into());
        assert!((point.x() - 9.).abs() < 1e-12);
        assert!(point.y().abs() < 1e-12);
    }

    #[test]
    fn test_identity() {
        let transform = Transform::default();
        assert!(transform.is_identity());
        assert_eq!(transform.apply(&(3., -2.).into()), (3., -2.).into());

        let mut transform = Transform::from_translation((1., 1.).into());
        transform += &Transform::from_rotation(0.5);
        assert_eq!(transform.split(), ((1., 1.).into(), 0.5));
    }
}
