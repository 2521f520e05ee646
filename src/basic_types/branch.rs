use crate::basic_types::ColumnIndex;

/// The sense of a single bound change within a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSense {
    /// The lower bound of the variable is raised to the new value.
    Lower,
    /// The upper bound of the variable is lowered to the new value.
    Upper,
    /// The variable is fixed to the new value (both bounds set at once).
    ///
    /// Fixings are never strengthened by the [`BranchEnforcer`]: a fixing inside a hole would be
    /// the engine contradicting the hole specification, which is not something branching can
    /// repair.
    ///
    /// [`BranchEnforcer`]: crate::hooks::BranchEnforcer
    Fixed,
}

/// A single bound change applied to one variable when a child node is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundChange {
    pub column: ColumnIndex,
    pub sense: BoundSense,
    pub bound: f64,
}

impl BoundChange {
    pub fn new(column: ColumnIndex, sense: BoundSense, bound: f64) -> Self {
        BoundChange {
            column,
            sense,
            bound,
        }
    }
}

/// The bound changes which create one child node, together with the objective estimate the
/// engine should attach to that child.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildNode {
    pub changes: Vec<BoundChange>,
    pub estimate: f64,
}

/// A complete branching instruction: one [`ChildNode`] batch per child to create.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BranchDirective {
    pub children: Vec<ChildNode>,
}

/// The kind of branch the engine proposes to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    /// An ordinary branch on a single variable.
    Variable,
    /// A branch on a special structure (for example an SOS constraint); such branches are always
    /// passed through unmodified.
    SpecialStructure,
}

/// The branch the engine is about to perform, as presented to the
/// [`BranchEnforcer`][crate::hooks::BranchEnforcer].
#[derive(Debug, Clone, PartialEq)]
pub struct ProposedBranch {
    pub kind: BranchKind,
    pub children: Vec<ChildNode>,
}
