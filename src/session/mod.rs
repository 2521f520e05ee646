//! Per-solve state: the catalog, the rejection slot, and the counters.

mod rejection_slot;

pub use rejection_slot::PendingRejection;
pub use rejection_slot::RejectionSlot;

use crate::catalog::HoleCatalog;
use crate::create_statistics_struct;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

create_statistics_struct!(
    /// The counters maintained by the hooks over one solve.
    HoleStatistics {
        /// The number of candidate incumbents checked.
        num_incumbent_calls: u64,
        /// The number of candidate incumbents rejected for lying in a hole.
        num_incumbents_rejected: u64,
        /// The number of branches replaced by a forced hole split.
        num_branches_forced: u64,
        /// The number of proposed bounds snapped to a hole edge.
        num_bounds_strengthened: u64,
        /// The number of cut separation rounds the engine offered.
        num_cut_calls: u64,
    }
);

/// The state of one solve, owned for the lifetime of the session and passed by reference into
/// every hook invocation.
///
/// The catalog is immutable after construction; only the rejection slot and the counters ever
/// change. The hooks receive `&mut SessionContext`, so a single-threaded search discipline is
/// enforced by the borrow rules rather than by locking.
#[derive(Debug)]
pub struct SessionContext {
    pub(crate) catalog: HoleCatalog,
    pub(crate) rejection_slot: RejectionSlot,
    pub(crate) statistics: HoleStatistics,
}

impl SessionContext {
    pub fn new(catalog: HoleCatalog) -> Self {
        SessionContext {
            catalog,
            rejection_slot: RejectionSlot::default(),
            statistics: HoleStatistics::default(),
        }
    }

    pub fn catalog(&self) -> &HoleCatalog {
        &self.catalog
    }

    pub fn statistics(&self) -> &HoleStatistics {
        &self.statistics
    }

    /// Returns true iff an incumbent rejection is waiting for the next branching decision.
    pub fn has_pending_rejection(&self) -> bool {
        self.rejection_slot.is_pending()
    }

    /// Logs all session counters through the provided [`StatisticLogger`].
    pub fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }
}
