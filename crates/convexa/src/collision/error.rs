use std::fmt::Display;

use convexa_macro_tools::Deref;

use crate::math::{point::Point, vector::Vector};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    ClosestPoint,
    Gjk,
    Epa,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Algorithm::ClosestPoint => "closest point search",
            Algorithm::Gjk => "gjk",
            Algorithm::Epa => "epa",
        })
    }
}

/// State of one iteration, kept so that a failing query can be replayed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraceStep {
    /// simplex or polytope positions at the start of the step
    pub vertices: Vec<Point>,
    pub direction: Vector,
    pub closest_point: Option<Point>,
    pub support_point: Option<Point>,
}

impl Display for TraceStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{vertex}")?;
        }
        write!(f, "] d: {}", self.direction)?;
        if let Some(closest_point) = self.closest_point {
            write!(f, " p: {closest_point}")?;
        }
        if let Some(support_point) = self.support_point {
            write!(f, " s: {support_point}")?;
        }
        Ok(())
    }
}

/// Full history of a query.
#[derive(Clone, Debug, Default, PartialEq, Deref)]
pub struct Trace {
    initial: Vec<Point>,
    #[deref]
    steps: Vec<TraceStep>,
}

impl Trace {
    pub(crate) fn new(initial: Vec<Point>) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    /// vertices the query started from
    pub fn initial(&self) -> &[Point] {
        &self.initial
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "initial: {:?}", self.initial)?;
        for (i, step) in self.steps.iter().enumerate() {
            write!(f, "\n  #{i}: {step}")?;
        }
        Ok(())
    }
}

/// Ways a query can fail.
///
/// A query that merely finds no intersection is not an error, see
/// [`Reason`](super::gjk::Reason).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum QueryError {
    /// A polygon without vertices was passed in.
    #[error("shape has no vertices")]
    EmptyShape,
    /// The iteration budget ran out, which means the algorithm has a defect
    /// or the input is numerically broken.
    #[error("{algorithm} did not terminate within {iterations} iterations")]
    IterationLimitExceeded {
        algorithm: Algorithm,
        iterations: usize,
        trace: Box<Trace>,
    },
    /// Every edge of the expanding polytope collapsed to a point.
    #[error("epa polytope has no edge with a length")]
    DegeneratePolytope { trace: Box<Trace> },
}

impl QueryError {
    pub(crate) fn iteration_limit(algorithm: Algorithm, iterations: usize, trace: Trace) -> Self {
        log::error!("{algorithm} did not terminate within {iterations} iterations, {trace}");
        Self::IterationLimitExceeded {
            algorithm,
            iterations,
            trace: Box::new(trace),
        }
    }

    /// history of the failing query, if one was recorded
    pub fn trace(&self) -> Option<&Trace> {
        match self {
            Self::EmptyShape => None,
            Self::IterationLimitExceeded { trace, .. } | Self::DegeneratePolytope { trace } => {
                Some(trace)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let mut trace = Trace::new(vec![(0., 0.).into()]);
        trace.push(TraceStep {
            vertices: vec![(1., 2.).into()],
            direction: (-1., -2.).into(),
            closest_point: Some((1., 2.).into()),
            support_point: None,
        });

        let error = QueryError::iteration_limit(Algorithm::Gjk, 400, trace);
        assert_eq!(
            error.to_string(),
            "gjk did not terminate within 400 iterations"
        );
        let trace = error.trace().unwrap();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.initial(), &[Point::new(0., 0.)]);
        assert!(trace.to_string().contains("#0: [(1, 2)]"));
    }

    #[test]
    fn test_empty_shape_has_no_trace() {
        assert!(QueryError::EmptyShape.trace().is_none());
    }
}
