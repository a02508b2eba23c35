//! Program executor
//!
//! Drives the heating module and fan through a baking program: warm-up,
//! each stage in order, then an optional cooldown.

pub mod error;
pub mod oven;
pub mod phase;

#[cfg(test)]
mod mock;

pub use error::OvenError;
pub use oven::{Oven, HEAT_UP_AND_FINISH_SETTING_TIME};
pub use phase::ExecutionPhase;
