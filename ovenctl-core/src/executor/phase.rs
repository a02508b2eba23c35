//! Execution phases

use core::fmt;

/// Where the executor is within a program run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExecutionPhase {
    /// No program has run yet
    #[default]
    Idle,
    /// Initial heater activation
    WarmingUp,
    /// Executing the stage at this index (0-based)
    RunningStage(u8),
    /// Fan running after the last stage
    CoolingDown,
    /// Program finished successfully
    Done,
    /// A hardware fault aborted the program
    Failed,
}

impl ExecutionPhase {
    /// Check if this phase ends a run
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExecutionPhase::Done | ExecutionPhase::Failed)
    }
}

impl fmt::Display for ExecutionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionPhase::Idle => f.write_str("idle"),
            ExecutionPhase::WarmingUp => f.write_str("warming up"),
            ExecutionPhase::RunningStage(index) => write!(f, "running stage {}", index),
            ExecutionPhase::CoolingDown => f.write_str("cooling down"),
            ExecutionPhase::Done => f.write_str("done"),
            ExecutionPhase::Failed => f.write_str("failed"),
        }
    }
}
