use super::{point::Point, vector::Vector};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    start_point: Point,
    end_point: Point,
}

impl Segment {
    pub fn new(start_point: Point, end_point: Point) -> Self {
        Self {
            start_point,
            end_point,
        }
    }

    pub fn start_point(&self) -> &Point {
        &self.start_point
    }

    pub fn end_point(&self) -> &Point {
        &self.end_point
    }

    pub fn to_vector(&self) -> Vector {
        self.into()
    }

    pub fn length(&self) -> crate::math::FloatNum {
        self.to_vector().abs()
    }
}

impl From<(Point, Point)> for Segment {
    fn from((start_point, end_point): (Point, Point)) -> Self {
        Segment {
            start_point,
            end_point,
        }
    }
}
