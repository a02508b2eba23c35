//! Board-agnostic core logic for the baking oven controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (heating module, fan)
//! - Baking program value types
//! - Program executor and execution phases
//! - Configuration type definitions (TOML and postcard)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

// Must come first so the logging macros are visible to later modules
#[macro_use]
mod fmt;

pub mod config;
pub mod executor;
pub mod program;
pub mod traits;

pub use executor::{ExecutionPhase, Oven, OvenError, HEAT_UP_AND_FINISH_SETTING_TIME};
pub use program::{BakingProgram, HeatType, HeatingSettings, ProgramError, ProgramStage};
pub use traits::{Fan, HeatingError, HeatingModule};
