//! Baking program value types
//!
//! Programs are fully built before they reach the executor. Nothing in
//! here talks to hardware.

pub mod baking;
pub mod settings;
pub mod stage;

pub use baking::{BakingProgram, ProgramError, MAX_STAGES};
pub use settings::HeatingSettings;
pub use stage::{HeatType, ProgramStage};
