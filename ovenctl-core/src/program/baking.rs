//! Complete baking program

use heapless::Vec;

use super::stage::ProgramStage;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum stages per program
pub const MAX_STAGES: usize = 16;

/// Errors building a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProgramError {
    /// More stages than the program can hold
    #[error("program has more than {max} stages")]
    TooManyStages { max: usize },
}

/// A baking program: warm-up temperature, ordered stages, cooldown flag
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BakingProgram {
    /// Warm-up target temperature in °C
    pub initial_temp_c: i16,
    /// Stages, executed in order
    pub stages: Vec<ProgramStage, MAX_STAGES>,
    /// Run the fan after the last stage to cool the chamber
    pub cool_at_finish: bool,
}

impl BakingProgram {
    /// Create a program from a slice of stages
    pub fn new(
        initial_temp_c: i16,
        stages: &[ProgramStage],
        cool_at_finish: bool,
    ) -> Result<Self, ProgramError> {
        let stages = Vec::from_slice(stages)
            .map_err(|_| ProgramError::TooManyStages { max: MAX_STAGES })?;

        Ok(Self {
            initial_temp_c,
            stages,
            cool_at_finish,
        })
    }

    /// Number of stages
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Check if the program has no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Total stage time in minutes (warm-up and cooldown excluded)
    pub fn total_stage_minutes(&self) -> u32 {
        self.stages
            .iter()
            .map(|s| s.stage_time_minutes as u32)
            .sum()
    }
}
