//! Exercises the full rejection-then-split protocol on a small catalog, driving the hooks the
//! way an engine adapter would.

use branch_and_hole::basic_types::BoundChange;
use branch_and_hole::basic_types::BoundSense;
use branch_and_hole::basic_types::BranchKind;
use branch_and_hole::basic_types::CandidateSolution;
use branch_and_hole::basic_types::ChildNode;
use branch_and_hole::basic_types::ColumnIndex;
use branch_and_hole::basic_types::ProposedBranch;
use branch_and_hole::basic_types::SolutionOrigin;
use branch_and_hole::catalog::parse_hole_file;
use branch_and_hole::catalog::serialize_hole_variables;
use branch_and_hole::catalog::HoleCatalog;
use branch_and_hole::engine::StaticEngine;
use branch_and_hole::hooks::BranchDecision;
use branch_and_hole::hooks::HoleHooks;
use branch_and_hole::hooks::IncumbentDecision;
use branch_and_hole::hooks::SearchHooks;
use branch_and_hole::session::SessionContext;

const HOLE_FILE: &str = "1\nx1 0 10 1\n3 6\n";

fn setup() -> (HoleHooks, StaticEngine) {
    let mut engine = StaticEngine::new(vec!["x0".to_owned(), "x1".to_owned()]);
    engine.set_node_objective(3.5);

    let variables = parse_hole_file(HOLE_FILE).expect("valid hole file");
    let catalog = HoleCatalog::resolve(variables, &engine);
    let hooks = HoleHooks::new(SessionContext::new(catalog));

    (hooks, engine)
}

#[test]
fn rejected_node_solution_is_split_around_the_hole() {
    let (mut hooks, engine) = setup();

    // x1 = 4 lies in the hole (3, 6) and must be rejected.
    let values = [0.0, 4.0];
    let candidate = CandidateSolution::new(&values, 4.0, SolutionOrigin::NodeSolution);
    assert_eq!(
        hooks.check_incumbent(&engine, &candidate),
        IncumbentDecision::Reject
    );

    // The next branching decision creates the children x1 <= 2 and x1 >= 7.
    let decision = hooks.decide_branch(&engine, None);
    let BranchDecision::Override(directive) = decision else {
        panic!("expected a forced hole split");
    };

    let x1 = ColumnIndex::new(1);
    assert_eq!(directive.children.len(), 2);
    assert_eq!(
        directive.children[0].changes,
        vec![BoundChange::new(x1, BoundSense::Upper, 2.0)]
    );
    assert_eq!(
        directive.children[1].changes,
        vec![BoundChange::new(x1, BoundSense::Lower, 7.0)]
    );
    assert_eq!(directive.children[0].estimate, 3.5);
    assert_eq!(directive.children[1].estimate, 3.5);

    // The rejection was consumed: absent a new rejection, the engine keeps its own branching.
    assert_eq!(hooks.decide_branch(&engine, None), BranchDecision::Default);
}

#[test]
fn proposed_bound_inside_the_hole_is_strengthened() {
    let (mut hooks, engine) = setup();
    let x1 = ColumnIndex::new(1);

    // No rejection is pending; the engine proposes raising the lower bound of x1 to 4.
    let proposed = ProposedBranch {
        kind: BranchKind::Variable,
        children: vec![ChildNode {
            changes: vec![BoundChange::new(x1, BoundSense::Lower, 4.0)],
            estimate: 2.25,
        }],
    };

    let decision = hooks.decide_branch(&engine, Some(&proposed));
    let BranchDecision::Override(directive) = decision else {
        panic!("expected the bound to be strengthened");
    };
    assert_eq!(
        directive.children[0].changes,
        vec![BoundChange::new(x1, BoundSense::Lower, 7.0)]
    );
    assert_eq!(directive.children[0].estimate, 2.25);
}

#[test]
fn accepted_incumbents_leave_the_branching_alone() {
    let (mut hooks, engine) = setup();

    let values = [0.0, 7.0];
    let candidate = CandidateSolution::new(&values, 7.0, SolutionOrigin::NodeSolution);
    assert_eq!(
        hooks.check_incumbent(&engine, &candidate),
        IncumbentDecision::Accept
    );
    assert_eq!(hooks.decide_branch(&engine, None), BranchDecision::Default);

    let session = hooks.into_session();
    assert_eq!(session.statistics().num_incumbent_calls, 1);
    assert_eq!(session.statistics().num_incumbents_rejected, 0);
}

#[test]
fn the_catalog_round_trips_through_its_file_format() {
    let variables = parse_hole_file(HOLE_FILE).expect("valid hole file");
    let reparsed =
        parse_hole_file(&serialize_hole_variables(&variables)).expect("serialised form is valid");
    assert_eq!(variables, reparsed);
}
