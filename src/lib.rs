//! # Branch-and-hole
//! Hole-aware incumbent filtering and branching for mixed-integer branch-and-bound engines.
//!
//! A *hole* is an open sub-interval of a variable's domain which is infeasible, for example a
//! forbidden operating range of a physical quantity. A generic branch-and-bound engine does not
//! know about holes; this crate supplies the two callback decisions which make such an engine
//! hole-correct:
//!
//! * the **incumbent check** rejects any candidate incumbent which assigns a hole variable a
//!   value inside one of its holes, and
//! * the **branching decision** either splits the current node around a hole which just caused a
//!   rejection, or snaps the engine's own proposed bounds out of holes they would land in.
//!
//! The engine is an external collaborator, abstracted by [`engine::EngineModel`]; the hooks are
//! bundled in [`hooks::HoleHooks`] and registered with whatever adapter wraps the concrete
//! solver.
//!
//! # Example
//! ```rust
//! use branch_and_hole::basic_types::CandidateSolution;
//! use branch_and_hole::basic_types::SolutionOrigin;
//! use branch_and_hole::catalog::parse_hole_file;
//! use branch_and_hole::catalog::HoleCatalog;
//! use branch_and_hole::engine::StaticEngine;
//! use branch_and_hole::hooks::BranchDecision;
//! use branch_and_hole::hooks::HoleHooks;
//! use branch_and_hole::hooks::IncumbentDecision;
//! use branch_and_hole::hooks::SearchHooks;
//! use branch_and_hole::session::SessionContext;
//!
//! // One variable x1 with domain [0, 10] and the hole (3, 6).
//! let variables = parse_hole_file("1\nx1 0 10 1\n3 6\n").unwrap();
//!
//! let engine = StaticEngine::new(vec!["x1".to_owned()]);
//! let catalog = HoleCatalog::resolve(variables, &engine);
//! let mut hooks = HoleHooks::new(SessionContext::new(catalog));
//!
//! // The engine reports an integer-feasible node solution with x1 = 4; it lies in the hole.
//! let values = [4.0];
//! let candidate = CandidateSolution::new(&values, 4.0, SolutionOrigin::NodeSolution);
//! assert_eq!(
//!     hooks.check_incumbent(&engine, &candidate),
//!     IncumbentDecision::Reject
//! );
//!
//! // The next branching decision splits the node around the hole: x1 <= 2 and x1 >= 7.
//! let decision = hooks.decide_branch(&engine, None);
//! let BranchDecision::Override(directive) = decision else {
//!     unreachable!()
//! };
//! assert_eq!(directive.children.len(), 2);
//! assert_eq!(directive.children[0].changes[0].bound, 2.0);
//! assert_eq!(directive.children[1].changes[0].bound, 7.0);
//! ```

pub mod basic_types;
pub mod catalog;
pub mod engine;
pub mod hooks;
pub mod session;
pub mod statistics;
