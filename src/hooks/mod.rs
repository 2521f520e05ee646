//! The hooks injected into the engine's search: the incumbent check, the branching decision,
//! and the (placeholder) cut separation.
//!
//! The engine drives: it calls [`SearchHooks::check_incumbent`] for every candidate incumbent
//! and [`SearchHooks::decide_branch`] for every branching opportunity. The two calls coordinate
//! through the session's [`RejectionSlot`][crate::session::RejectionSlot]: a node-solution
//! rejection arms the slot, and the very next branching decision consumes it to split the node
//! around the violated hole.

mod branch_enforcer;
mod cut_separator;
mod incumbent_filter;

pub use branch_enforcer::BranchEnforcer;
pub use cut_separator::CutSeparator;
pub use incumbent_filter::IncumbentFilter;

use crate::basic_types::BranchDirective;
use crate::basic_types::CandidateSolution;
use crate::basic_types::ProposedBranch;
use crate::engine::EngineModel;
use crate::session::SessionContext;

/// The verdict on a candidate incumbent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncumbentDecision {
    /// The candidate is acceptable as the new incumbent.
    Accept,
    /// The candidate lies in a hole and must not become the incumbent.
    Reject,
}

/// The verdict on a branching opportunity.
#[derive(Debug, Clone, PartialEq)]
pub enum BranchDecision {
    /// Replace the engine's branching with the given directive.
    Override(BranchDirective),
    /// Let the engine branch as it proposed.
    Default,
}

/// The verdict of a cut separation round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutDecision {
    /// No cuts are added this round.
    NoCuts,
}

/// The capability set registered with the engine at session setup.
///
/// A solver adapter calls these at its incumbent, branching, and cut callback points and applies
/// the returned decisions. All three methods must return without blocking; they are executed
/// synchronously inside the engine's search loop.
pub trait SearchHooks {
    /// Called for every candidate incumbent the engine finds.
    fn check_incumbent(
        &mut self,
        engine: &dyn EngineModel,
        candidate: &CandidateSolution<'_>,
    ) -> IncumbentDecision;

    /// Called for every branching opportunity; `proposed` carries the engine's own intended
    /// branch when it has one.
    fn decide_branch(
        &mut self,
        engine: &dyn EngineModel,
        proposed: Option<&ProposedBranch>,
    ) -> BranchDecision;

    /// Called whenever the engine offers a user-cut separation round.
    fn separate_cuts(&mut self, engine: &dyn EngineModel) -> CutDecision;
}

/// The hole-aware implementation of [`SearchHooks`], bundling the three hook implementations
/// around a single [`SessionContext`].
#[derive(Debug)]
pub struct HoleHooks {
    session: SessionContext,
    incumbent_filter: IncumbentFilter,
    branch_enforcer: BranchEnforcer,
    cut_separator: CutSeparator,
}

impl HoleHooks {
    pub fn new(session: SessionContext) -> Self {
        HoleHooks {
            session,
            incumbent_filter: IncumbentFilter::new(),
            branch_enforcer: BranchEnforcer::new(),
            cut_separator: CutSeparator::default(),
        }
    }

    /// Sets the number of cut separation rounds offered to the (placeholder) separator.
    pub fn with_cut_rounds(mut self, max_rounds: u64) -> Self {
        self.cut_separator = CutSeparator::new(max_rounds);
        self
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Consumes the hooks and returns the session, for reporting after the solve.
    pub fn into_session(self) -> SessionContext {
        self.session
    }
}

impl SearchHooks for HoleHooks {
    fn check_incumbent(
        &mut self,
        _engine: &dyn EngineModel,
        candidate: &CandidateSolution<'_>,
    ) -> IncumbentDecision {
        self.incumbent_filter
            .check_incumbent(&mut self.session, candidate)
    }

    fn decide_branch(
        &mut self,
        engine: &dyn EngineModel,
        proposed: Option<&ProposedBranch>,
    ) -> BranchDecision {
        self.branch_enforcer
            .decide_branch(&mut self.session, engine, proposed)
    }

    fn separate_cuts(&mut self, engine: &dyn EngineModel) -> CutDecision {
        self.cut_separator.separate_cuts(&mut self.session, engine)
    }
}
