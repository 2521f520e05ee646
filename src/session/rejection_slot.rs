use log::debug;

use crate::basic_types::ColumnIndex;

/// The rejection recorded by the incumbent check for the next branching decision to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRejection {
    /// Position of the rejected variable in the catalog's declaration order.
    pub variable_index: usize,
    /// Position of the violated hole within that variable's hole list.
    pub hole_index: usize,
    /// The engine column of the rejected variable.
    pub column: ColumnIndex,
}

/// Single-slot handoff from the incumbent check to the next branching decision.
///
/// The slot is a mailbox, not a queue: arming it while a rejection is still pending overwrites
/// the previous rejection. This cannot happen as long as the engine calls the branching hook for
/// a node before reporting the next node solution, which holds for a single-threaded search; a
/// parallel search needs one slot per search thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct RejectionSlot {
    pending: Option<PendingRejection>,
}

impl RejectionSlot {
    /// Records a rejection for the next branching decision.
    pub fn arm(&mut self, rejection: PendingRejection) {
        if let Some(previous) = self.pending.replace(rejection) {
            debug!(
                "overwriting pending hole rejection on {} before it was consumed",
                previous.column
            );
        }
    }

    /// Takes the pending rejection, leaving the slot empty.
    pub fn take(&mut self) -> Option<PendingRejection> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
