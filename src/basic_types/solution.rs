use crate::basic_types::ColumnIndex;

/// The calling context in which the engine produced a candidate incumbent.
///
/// Only rejections of [`SolutionOrigin::NodeSolution`] candidates arm the
/// [`RejectionSlot`][crate::session::RejectionSlot]; candidates from other origins (for example
/// primal heuristics) are still rejected when they land in a hole, but no branching reaction
/// follows since there is no associated node to split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionOrigin {
    /// The candidate is the integer-feasible relaxation solution of the node currently being
    /// processed.
    NodeSolution,
    /// The candidate was produced by a primal heuristic.
    Heuristic,
    /// Any other origin reported by the engine.
    Other,
}

/// A candidate incumbent reported by the engine: one value per engine column, plus the calling
/// context it originated from.
#[derive(Debug, Clone, Copy)]
pub struct CandidateSolution<'a> {
    values: &'a [f64],
    objective: f64,
    origin: SolutionOrigin,
}

impl<'a> CandidateSolution<'a> {
    pub fn new(values: &'a [f64], objective: f64, origin: SolutionOrigin) -> Self {
        CandidateSolution {
            values,
            objective,
            origin,
        }
    }

    /// The value the candidate assigns to the given column.
    pub fn value(&self, column: ColumnIndex) -> f64 {
        self.values[column.index as usize]
    }

    pub fn objective(&self) -> f64 {
        self.objective
    }

    pub fn origin(&self) -> SolutionOrigin {
        self.origin
    }
}
