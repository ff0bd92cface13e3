use super::FloatNum;

/// weight is considered non negative when it lies above `-epsilon`
#[inline]
pub(crate) fn is_non_negative(value: FloatNum, epsilon: FloatNum) -> bool {
    value >= -epsilon
}

#[inline]
pub(crate) fn is_nearly_zero(value: FloatNum, epsilon: FloatNum) -> bool {
    value.abs() <= epsilon
}

// largest magnitude among the values, never below one, used to turn the
// dimensionless epsilon into a length
pub(crate) fn magnitude_scale(values: impl IntoIterator<Item = FloatNum>) -> FloatNum {
    values.into_iter().map(FloatNum::abs).fold(1., FloatNum::max)
}
