use log::trace;

use crate::engine::EngineModel;
use crate::hooks::CutDecision;
use crate::session::SessionContext;

/// Extension point for separating cuts from the hole structure.
///
/// No separation algorithm is implemented; every round declines to add cuts. The round limit is
/// kept so that a future separator has the same surface as the other hooks.
#[derive(Debug, Default, Clone, Copy)]
pub struct CutSeparator {
    max_rounds: u64,
}

impl CutSeparator {
    pub fn new(max_rounds: u64) -> Self {
        CutSeparator { max_rounds }
    }

    /// Offers the separator a chance to add cuts; it currently always declines.
    pub fn separate_cuts(
        &self,
        session: &mut SessionContext,
        _engine: &dyn EngineModel,
    ) -> CutDecision {
        session.statistics.num_cut_calls += 1;

        if session.statistics.num_cut_calls <= self.max_rounds {
            trace!(
                "cut separation round {} of {}: no separation implemented",
                session.statistics.num_cut_calls,
                self.max_rounds
            );
        }

        CutDecision::NoCuts
    }
}
