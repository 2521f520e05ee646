//! Basic types shared between the hole catalog, the hooks, and the engine interface.

mod branch;
mod column_index;
mod hole;
mod solution;

pub use branch::BoundChange;
pub use branch::BoundSense;
pub use branch::BranchDirective;
pub use branch::BranchKind;
pub use branch::ChildNode;
pub use branch::ProposedBranch;
pub use column_index::ColumnIndex;
pub use hole::Hole;
pub use hole::HoleVariable;
pub use solution::CandidateSolution;
pub use solution::SolutionOrigin;

/// Tolerance used when testing whether a sampled solution value lies inside a hole.
///
/// A value `v` is considered to be inside the hole `(lo, hi)` iff
/// `lo - 1 + EPS_VIOL < v < hi + 1 - EPS_VIOL`.
pub const EPS_VIOL: f64 = 1e-5;
