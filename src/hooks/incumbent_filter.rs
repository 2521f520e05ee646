use log::debug;

use crate::basic_types::CandidateSolution;
use crate::basic_types::EPS_VIOL;
use crate::basic_types::SolutionOrigin;
use crate::hooks::IncumbentDecision;
use crate::session::PendingRejection;
use crate::session::SessionContext;

/// Rejects candidate incumbents which assign a hole variable a value inside one of its holes.
///
/// The check walks the catalog in declaration order and stops at the first violated hole. When
/// the rejected candidate is a node solution, the violation is recorded in the session's
/// [`RejectionSlot`][crate::session::RejectionSlot] so that the
/// [`BranchEnforcer`][crate::hooks::BranchEnforcer] can split the node at that hole.
#[derive(Debug, Clone, Copy)]
pub struct IncumbentFilter {
    tolerance: f64,
}

impl Default for IncumbentFilter {
    fn default() -> Self {
        IncumbentFilter {
            tolerance: EPS_VIOL,
        }
    }
}

impl IncumbentFilter {
    pub fn new() -> Self {
        IncumbentFilter::default()
    }

    /// Overrides the tolerance used for the hole membership test.
    pub fn with_tolerance(tolerance: f64) -> Self {
        IncumbentFilter { tolerance }
    }

    /// Checks a candidate incumbent against the catalog.
    pub fn check_incumbent(
        &self,
        session: &mut SessionContext,
        candidate: &CandidateSolution<'_>,
    ) -> IncumbentDecision {
        let SessionContext {
            catalog,
            rejection_slot,
            statistics,
        } = session;

        statistics.num_incumbent_calls += 1;

        for (variable_index, variable) in catalog.variables().iter().enumerate() {
            let Some(column) = variable.column else {
                continue;
            };
            let value = candidate.value(column);

            for (hole_index, hole) in variable.holes.iter().enumerate() {
                if hole.contains_value(value, self.tolerance) {
                    statistics.num_incumbents_rejected += 1;

                    if candidate.origin() == SolutionOrigin::NodeSolution {
                        rejection_slot.arm(PendingRejection {
                            variable_index,
                            hole_index,
                            column,
                        });
                    }

                    debug!(
                        "rejecting incumbent: {} = {value} lies in hole ({}, {})",
                        variable.name, hole.lower, hole.upper
                    );
                    return IncumbentDecision::Reject;
                }
            }
        }

        IncumbentDecision::Accept
    }
}

#[cfg(test)]
mod tests {
    use super::IncumbentFilter;
    use crate::basic_types::CandidateSolution;
    use crate::basic_types::ColumnIndex;
    use crate::basic_types::Hole;
    use crate::basic_types::HoleVariable;
    use crate::basic_types::SolutionOrigin;
    use crate::catalog::HoleCatalog;
    use crate::engine::StaticEngine;
    use crate::hooks::IncumbentDecision;
    use crate::session::SessionContext;

    fn session(declared: Vec<HoleVariable>, columns: &[&str]) -> SessionContext {
        let engine = StaticEngine::new(columns.iter().map(|n| (*n).to_owned()).collect());
        SessionContext::new(HoleCatalog::resolve(declared, &engine))
    }

    fn variable(name: &str, holes: Vec<Hole>) -> HoleVariable {
        HoleVariable::new(name.to_owned(), 0, 10, holes)
    }

    #[test]
    fn value_in_hole_is_rejected_and_arms_the_slot() {
        let mut session = session(vec![variable("x1", vec![Hole::new(3, 6)])], &["x1"]);
        let filter = IncumbentFilter::new();

        let values = [4.0];
        let candidate = CandidateSolution::new(&values, 4.0, SolutionOrigin::NodeSolution);

        assert_eq!(
            filter.check_incumbent(&mut session, &candidate),
            IncumbentDecision::Reject
        );
        assert!(session.has_pending_rejection());
        assert_eq!(session.statistics().num_incumbents_rejected, 1);
    }

    #[test]
    fn heuristic_rejection_does_not_arm_the_slot() {
        let mut session = session(vec![variable("x1", vec![Hole::new(3, 6)])], &["x1"]);
        let filter = IncumbentFilter::new();

        let values = [4.0];
        let candidate = CandidateSolution::new(&values, 4.0, SolutionOrigin::Heuristic);

        assert_eq!(
            filter.check_incumbent(&mut session, &candidate),
            IncumbentDecision::Reject
        );
        assert!(!session.has_pending_rejection());
    }

    #[test]
    fn values_on_hole_edges_are_accepted() {
        let mut session = session(vec![variable("x1", vec![Hole::new(3, 6)])], &["x1"]);
        let filter = IncumbentFilter::new();

        for value in [2.0, 7.0, 0.0, 10.0] {
            let values = [value];
            let candidate = CandidateSolution::new(&values, value, SolutionOrigin::NodeSolution);
            assert_eq!(
                filter.check_incumbent(&mut session, &candidate),
                IncumbentDecision::Accept,
                "value {value} should be accepted"
            );
        }
        assert!(!session.has_pending_rejection());
        assert_eq!(session.statistics().num_incumbent_calls, 4);
    }

    #[test]
    fn first_violated_variable_in_catalog_order_wins() {
        // x2 is declared first, so its hole is found even though x1 is also violated.
        let mut session = session(
            vec![
                variable("x2", vec![Hole::new(1, 2)]),
                variable("x1", vec![Hole::new(3, 6)]),
            ],
            &["x1", "x2"],
        );
        let filter = IncumbentFilter::new();

        let values = [4.0, 1.5];
        let candidate = CandidateSolution::new(&values, 0.0, SolutionOrigin::NodeSolution);

        let _ = filter.check_incumbent(&mut session, &candidate);
        let rejection = session.rejection_slot.take().expect("slot is armed");
        assert_eq!(rejection.variable_index, 0);
        assert_eq!(rejection.column, ColumnIndex::new(1));
    }

    #[test]
    fn unresolved_variables_are_ignored() {
        let mut session = session(vec![variable("ghost", vec![Hole::new(0, 9)])], &["x1"]);
        let filter = IncumbentFilter::new();

        let values = [5.0];
        let candidate = CandidateSolution::new(&values, 5.0, SolutionOrigin::NodeSolution);

        assert_eq!(
            filter.check_incumbent(&mut session, &candidate),
            IncumbentDecision::Accept
        );
    }
}
