use convexa_macro_tools::{Builder, Fields};

use crate::math::FloatNum;

/// Limits and tolerances shared by every query.
///
/// Exceeding one of the iteration limits is a defect of the algorithm (or of
/// the input numbers), never a negative answer, so the limits are generous.
#[derive(Clone, Debug, PartialEq, Fields, Builder)]
#[r]
pub struct QueryConfig {
    #[default = 100]
    max_closest_point_iterations: usize,
    #[default = 400]
    max_gjk_iterations: usize,
    #[default = 100]
    max_epa_iterations: usize,
    // absolute distance, the polytope edge is final once the support point is this close
    #[default = 0.001]
    epa_tolerance: FloatNum,
    // relative, used for containment weights, colinearity and support progress
    #[default = 1e-9]
    epsilon: FloatNum,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QueryConfig::default();
        assert_eq!(config.max_closest_point_iterations(), 100);
        assert_eq!(config.max_gjk_iterations(), 400);
        assert_eq!(config.max_epa_iterations(), 100);
        assert_eq!(config.epa_tolerance(), 0.001);
        assert_eq!(config.epsilon(), 1e-9);
    }

    #[test]
    fn test_builder_overrides_single_field() {
        let config: QueryConfig = QueryConfigBuilder::new()
            .max_gjk_iterations(8)
            .epa_tolerance(0.01)
            .into();

        assert_eq!(config.max_gjk_iterations(), 8);
        assert_eq!(config.epa_tolerance(), 0.01);
        assert_eq!(config.max_epa_iterations(), 100);
    }
}
