use log::debug;

use crate::basic_types::BoundChange;
use crate::basic_types::BoundSense;
use crate::basic_types::BranchDirective;
use crate::basic_types::BranchKind;
use crate::basic_types::ChildNode;
use crate::basic_types::ProposedBranch;
use crate::catalog::HoleCatalog;
use crate::engine::EngineModel;
use crate::hooks::BranchDecision;
use crate::session::HoleStatistics;
use crate::session::PendingRejection;
use crate::session::SessionContext;

/// Turns incumbent rejections into hole-splitting branches and keeps the engine's own branching
/// out of holes.
///
/// At every branching opportunity exactly one of two modes applies:
/// 1. a rejection is pending in the session's
///    [`RejectionSlot`][crate::session::RejectionSlot]: the engine's proposal is discarded and
///    the node is split around the violated hole;
/// 2. otherwise the engine's proposed bounds are inspected, and any new bound which lands
///    strictly inside a hole is snapped to the far edge of that hole in the direction the bound
///    moves.
#[derive(Debug, Default, Clone, Copy)]
pub struct BranchEnforcer;

impl BranchEnforcer {
    pub fn new() -> Self {
        BranchEnforcer
    }

    /// Decides whether to override the engine's proposed branch.
    ///
    /// `proposed` is `None` for degenerate invocations in which the engine has no concrete
    /// proposal; such calls can still trigger a forced hole split.
    pub fn decide_branch(
        &self,
        session: &mut SessionContext,
        engine: &dyn EngineModel,
        proposed: Option<&ProposedBranch>,
    ) -> BranchDecision {
        let SessionContext {
            catalog,
            rejection_slot,
            statistics,
        } = session;

        if let Some(rejection) = rejection_slot.take() {
            return Self::force_hole_split(catalog, statistics, engine, rejection);
        }

        Self::strengthen_proposal(catalog, statistics, proposed)
    }

    /// Splits the current node around the hole recorded by the incumbent check.
    ///
    /// The split is complete: every feasible value of the variable is at or below
    /// `hole.lower - 1` or at or above `hole.upper + 1`, so exactly one child covers it. Both
    /// children inherit the parent's objective estimate.
    fn force_hole_split(
        catalog: &HoleCatalog,
        statistics: &mut HoleStatistics,
        engine: &dyn EngineModel,
        rejection: PendingRejection,
    ) -> BranchDecision {
        let variable = &catalog.variables()[rejection.variable_index];
        let hole = variable.holes[rejection.hole_index];
        let estimate = engine.node_objective();

        let below = ChildNode {
            changes: vec![BoundChange::new(
                rejection.column,
                BoundSense::Upper,
                hole.last_value_below(),
            )],
            estimate,
        };
        let above = ChildNode {
            changes: vec![BoundChange::new(
                rejection.column,
                BoundSense::Lower,
                hole.first_value_above(),
            )],
            estimate,
        };

        statistics.num_branches_forced += 1;
        debug!(
            "branching on {} around hole ({}, {}): children {} <= {} and {} >= {}",
            variable.name,
            hole.lower,
            hole.upper,
            variable.name,
            hole.last_value_below(),
            variable.name,
            hole.first_value_above()
        );

        BranchDecision::Override(BranchDirective {
            children: vec![below, above],
        })
    }

    /// Snaps proposed bounds which land inside a hole to the hole's far edge.
    ///
    /// Only ordinary single-variable branches are considered; special-structure branches and
    /// exact fixings pass through untouched. When at least one bound is snapped the entire
    /// batch-set is re-emitted with its original grouping and estimates, otherwise the engine
    /// keeps its own proposal.
    fn strengthen_proposal(
        catalog: &HoleCatalog,
        statistics: &mut HoleStatistics,
        proposed: Option<&ProposedBranch>,
    ) -> BranchDecision {
        let Some(proposed) = proposed else {
            return BranchDecision::Default;
        };
        if proposed.kind != BranchKind::Variable || proposed.children.is_empty() {
            return BranchDecision::Default;
        }

        let mut children = proposed.children.clone();
        let mut strengthened = false;

        for child in &mut children {
            for change in &mut child.changes {
                if change.sense == BoundSense::Fixed {
                    continue;
                }
                let Some(holes) = catalog.holes_for(change.column) else {
                    continue;
                };
                if let Some(hole) = holes.iter().find(|hole| hole.contains_bound(change.bound)) {
                    let snapped = match change.sense {
                        BoundSense::Lower => hole.first_value_above(),
                        BoundSense::Upper => hole.last_value_below(),
                        BoundSense::Fixed => unreachable!("fixings are skipped above"),
                    };
                    debug!(
                        "proposed bound {} on {} lies in hole ({}, {}); snapping to {snapped}",
                        change.bound, change.column, hole.lower, hole.upper
                    );
                    change.bound = snapped;
                    strengthened = true;
                    statistics.num_bounds_strengthened += 1;
                }
            }
        }

        if strengthened {
            BranchDecision::Override(BranchDirective { children })
        } else {
            BranchDecision::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BranchEnforcer;
    use crate::basic_types::BoundChange;
    use crate::basic_types::BoundSense;
    use crate::basic_types::BranchKind;
    use crate::basic_types::CandidateSolution;
    use crate::basic_types::ChildNode;
    use crate::basic_types::ColumnIndex;
    use crate::basic_types::Hole;
    use crate::basic_types::HoleVariable;
    use crate::basic_types::ProposedBranch;
    use crate::basic_types::SolutionOrigin;
    use crate::catalog::HoleCatalog;
    use crate::engine::StaticEngine;
    use crate::hooks::BranchDecision;
    use crate::hooks::IncumbentFilter;
    use crate::session::SessionContext;

    fn single_variable_session() -> (SessionContext, StaticEngine) {
        let engine = StaticEngine::new(vec!["x1".to_owned()]);
        let variables = vec![HoleVariable::new(
            "x1".to_owned(),
            0,
            10,
            vec![Hole::new(3, 6)],
        )];
        let session = SessionContext::new(HoleCatalog::resolve(variables, &engine));
        (session, engine)
    }

    fn proposal(children: Vec<ChildNode>) -> ProposedBranch {
        ProposedBranch {
            kind: BranchKind::Variable,
            children,
        }
    }

    fn child(sense: BoundSense, bound: f64) -> ChildNode {
        ChildNode {
            changes: vec![BoundChange::new(ColumnIndex::new(0), sense, bound)],
            estimate: 1.5,
        }
    }

    #[test]
    fn pending_rejection_forces_a_hole_split() {
        let (mut session, mut engine) = single_variable_session();
        engine.set_node_objective(12.5);

        let values = [4.0];
        let candidate = CandidateSolution::new(&values, 4.0, SolutionOrigin::NodeSolution);
        let _ = IncumbentFilter::new().check_incumbent(&mut session, &candidate);

        let decision = BranchEnforcer::new().decide_branch(&mut session, &engine, None);

        let BranchDecision::Override(directive) = decision else {
            panic!("expected an override, got {decision:?}");
        };
        assert_eq!(directive.children.len(), 2);
        assert_eq!(
            directive.children[0].changes,
            vec![BoundChange::new(ColumnIndex::new(0), BoundSense::Upper, 2.0)]
        );
        assert_eq!(
            directive.children[1].changes,
            vec![BoundChange::new(ColumnIndex::new(0), BoundSense::Lower, 7.0)]
        );
        // Both children inherit the parent estimate.
        assert_eq!(directive.children[0].estimate, 12.5);
        assert_eq!(directive.children[1].estimate, 12.5);
        assert_eq!(session.statistics().num_branches_forced, 1);
    }

    #[test]
    fn the_slot_is_consumed_by_the_forced_split() {
        let (mut session, engine) = single_variable_session();

        let values = [4.0];
        let candidate = CandidateSolution::new(&values, 4.0, SolutionOrigin::NodeSolution);
        let _ = IncumbentFilter::new().check_incumbent(&mut session, &candidate);

        let enforcer = BranchEnforcer::new();
        let first = enforcer.decide_branch(&mut session, &engine, None);
        let second = enforcer.decide_branch(&mut session, &engine, None);

        assert!(matches!(first, BranchDecision::Override(_)));
        assert_eq!(second, BranchDecision::Default);
    }

    #[test]
    fn pending_rejection_discards_the_engine_proposal() {
        let (mut session, mut engine) = single_variable_session();
        engine.set_node_objective(12.5);

        let values = [4.0];
        let candidate = CandidateSolution::new(&values, 4.0, SolutionOrigin::NodeSolution);
        let _ = IncumbentFilter::new().check_incumbent(&mut session, &candidate);

        // The proposal's bound lies in the hole and would normally be strengthened, but the
        // pending rejection takes priority and replaces the proposal wholesale.
        let proposed = proposal(vec![child(BoundSense::Lower, 4.0)]);
        let decision = BranchEnforcer::new().decide_branch(&mut session, &engine, Some(&proposed));

        let BranchDecision::Override(directive) = decision else {
            panic!("expected an override, got {decision:?}");
        };
        assert_eq!(directive.children.len(), 2);
        assert_eq!(
            directive.children[0].changes,
            vec![BoundChange::new(ColumnIndex::new(0), BoundSense::Upper, 2.0)]
        );
        assert_eq!(
            directive.children[1].changes,
            vec![BoundChange::new(ColumnIndex::new(0), BoundSense::Lower, 7.0)]
        );
        // The forced split carries the node estimate, not the proposal's.
        assert_eq!(directive.children[0].estimate, 12.5);
        assert_eq!(session.statistics().num_branches_forced, 1);
        assert_eq!(session.statistics().num_bounds_strengthened, 0);
    }

    #[test]
    fn lower_bound_in_hole_snaps_up() {
        let (mut session, engine) = single_variable_session();

        let proposed = proposal(vec![child(BoundSense::Lower, 4.0)]);
        let decision = BranchEnforcer::new().decide_branch(&mut session, &engine, Some(&proposed));

        let BranchDecision::Override(directive) = decision else {
            panic!("expected an override, got {decision:?}");
        };
        assert_eq!(directive.children[0].changes[0].bound, 7.0);
        assert_eq!(directive.children[0].changes[0].sense, BoundSense::Lower);
        assert_eq!(directive.children[0].estimate, 1.5);
        assert_eq!(session.statistics().num_bounds_strengthened, 1);
    }

    #[test]
    fn upper_bound_in_hole_snaps_down() {
        let (mut session, engine) = single_variable_session();

        let proposed = proposal(vec![child(BoundSense::Upper, 5.0)]);
        let decision = BranchEnforcer::new().decide_branch(&mut session, &engine, Some(&proposed));

        let BranchDecision::Override(directive) = decision else {
            panic!("expected an override, got {decision:?}");
        };
        assert_eq!(directive.children[0].changes[0].bound, 2.0);
        assert_eq!(directive.children[0].changes[0].sense, BoundSense::Upper);
    }

    #[test]
    fn bounds_outside_holes_are_not_overridden() {
        let (mut session, engine) = single_variable_session();

        let proposed = proposal(vec![
            child(BoundSense::Lower, 7.0),
            child(BoundSense::Upper, 2.0),
        ]);
        let decision = BranchEnforcer::new().decide_branch(&mut session, &engine, Some(&proposed));

        assert_eq!(decision, BranchDecision::Default);
        assert_eq!(session.statistics().num_bounds_strengthened, 0);
    }

    #[test]
    fn fixings_pass_through_unchanged() {
        let (mut session, engine) = single_variable_session();

        let proposed = proposal(vec![child(BoundSense::Fixed, 4.0)]);
        let decision = BranchEnforcer::new().decide_branch(&mut session, &engine, Some(&proposed));

        assert_eq!(decision, BranchDecision::Default);
    }

    #[test]
    fn special_structure_branches_pass_through() {
        let (mut session, engine) = single_variable_session();

        let proposed = ProposedBranch {
            kind: BranchKind::SpecialStructure,
            children: vec![child(BoundSense::Lower, 4.0)],
        };
        let decision = BranchEnforcer::new().decide_branch(&mut session, &engine, Some(&proposed));

        assert_eq!(decision, BranchDecision::Default);
    }

    #[test]
    fn whole_batch_set_is_emitted_when_one_entry_snaps() {
        let (mut session, engine) = single_variable_session();

        // Two children; only the first lands in the hole.
        let proposed = proposal(vec![
            child(BoundSense::Lower, 4.0),
            child(BoundSense::Upper, 1.0),
        ]);
        let decision = BranchEnforcer::new().decide_branch(&mut session, &engine, Some(&proposed));

        let BranchDecision::Override(directive) = decision else {
            panic!("expected an override, got {decision:?}");
        };
        assert_eq!(directive.children.len(), 2);
        assert_eq!(directive.children[0].changes[0].bound, 7.0);
        // The untouched child is preserved as proposed.
        assert_eq!(directive.children[1], child(BoundSense::Upper, 1.0));
    }
}
