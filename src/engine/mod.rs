//! The interface to the external branch-and-bound engine.
//!
//! The engine owns the search: it solves relaxations, maintains the tree, and calls into the
//! hooks registered with it. This crate never drives the engine; it only answers the two
//! questions the engine asks (is this incumbent acceptable, and how should this node be
//! branched) and queries the engine for the little information those answers need.

use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::ColumnIndex;

/// How the engine's search ended, in terms coarse enough for the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineStatus {
    /// The search proved optimality.
    Optimal,
    /// The search ran into its time limit.
    TimeLimit,
    /// Any other exit the engine reports.
    #[default]
    Other,
}

impl Display for EngineStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            EngineStatus::Optimal => "OPTIMAL",
            EngineStatus::TimeLimit => "TIME_LIMIT",
            EngineStatus::Other => "OTHER_EXIT",
        };
        write!(f, "{status}")
    }
}

/// The queries the hooks and the catalog make against the external engine.
///
/// Implemented by whatever adapter wraps the concrete solver. All methods are read-only; branch
/// instructions travel in the other direction as the return value of
/// [`SearchHooks::decide_branch`][crate::hooks::SearchHooks::decide_branch].
pub trait EngineModel {
    /// The total number of columns (variables) of the loaded problem.
    fn num_columns(&self) -> usize;

    /// Resolves a variable name to its column index, or `None` if no column carries that name.
    fn column_index(&self, name: &str) -> Option<ColumnIndex>;

    /// The objective value of the relaxation at the node currently being processed.
    ///
    /// Used as the child estimate when a hole split is forced, since no re-estimation is
    /// performed for the two children.
    fn node_objective(&self) -> f64;

    /// The number of nodes the search has processed.
    fn num_nodes(&self) -> u64;

    /// The best proven objective bound.
    fn best_bound(&self) -> f64;

    /// The objective value of the incumbent, or `None` when no incumbent was accepted.
    fn objective(&self) -> Option<f64>;

    /// How the search ended.
    fn status(&self) -> EngineStatus;
}

/// An [`EngineModel`] backed by a plain column-name table.
///
/// This stands in for a real solver when resolving a catalog offline and in tests; it knows the
/// columns of a problem but performs no search. Whatever drives it records the outcome of its
/// run through [`StaticEngine::set_search_result`], so that summaries can be written from
/// [`EngineModel`] queries alone.
#[derive(Debug, Default)]
pub struct StaticEngine {
    columns: Vec<String>,
    node_objective: f64,
    num_nodes: u64,
    best_bound: f64,
    objective: Option<f64>,
    status: EngineStatus,
}

impl StaticEngine {
    pub fn new(columns: Vec<String>) -> Self {
        StaticEngine {
            columns,
            ..Default::default()
        }
    }

    /// Sets the value reported by [`EngineModel::node_objective`].
    pub fn set_node_objective(&mut self, objective: f64) {
        self.node_objective = objective;
    }

    /// Records the outcome of a run for the search-result queries to report.
    pub fn set_search_result(
        &mut self,
        num_nodes: u64,
        best_bound: f64,
        objective: Option<f64>,
        status: EngineStatus,
    ) {
        self.num_nodes = num_nodes;
        self.best_bound = best_bound;
        self.objective = objective;
        self.status = status;
    }
}

impl EngineModel for StaticEngine {
    fn num_columns(&self) -> usize {
        self.columns.len()
    }

    fn column_index(&self, name: &str) -> Option<ColumnIndex> {
        self.columns
            .iter()
            .position(|column| column == name)
            .map(|index| ColumnIndex::new(index as u32))
    }

    fn node_objective(&self) -> f64 {
        self.node_objective
    }

    fn num_nodes(&self) -> u64 {
        self.num_nodes
    }

    fn best_bound(&self) -> f64 {
        self.best_bound
    }

    fn objective(&self) -> Option<f64> {
        self.objective
    }

    fn status(&self) -> EngineStatus {
        self.status
    }
}
