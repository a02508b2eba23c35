//! Hardware abstraction traits
//!
//! These traits define the interface between the program executor
//! and hardware-specific implementations.

pub mod fan;
pub mod heating;

pub use fan::Fan;
pub use heating::{HeatingError, HeatingModule};
