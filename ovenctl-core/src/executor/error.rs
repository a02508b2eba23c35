//! Program execution failure

use super::phase::ExecutionPhase;
use crate::traits::HeatingError;

/// A baking program was aborted by a hardware fault
///
/// Carries the phase that was executing and the heating module error
/// as its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[error("baking program failed while {phase}")]
pub struct OvenError {
    phase: ExecutionPhase,
    #[source]
    source: HeatingError,
}

impl OvenError {
    /// Wrap a heating fault raised during `phase`
    pub const fn new(phase: ExecutionPhase, source: HeatingError) -> Self {
        Self { phase, source }
    }

    /// Phase that was executing when the fault occurred
    pub fn phase(&self) -> ExecutionPhase {
        self.phase
    }

    /// The underlying hardware fault
    pub fn heating_error(&self) -> HeatingError {
        self.source
    }
}
