pub mod point;
pub mod segment;
pub mod vector;

pub(crate) mod num;

pub type FloatNum = f64;

#[inline]
pub fn pi() -> FloatNum {
    std::f64::consts::PI
}

#[inline]
pub fn tau() -> FloatNum {
    std::f64::consts::TAU
}
