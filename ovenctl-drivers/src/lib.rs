//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in ovenctl-core, switching relays through GPIO pins:
//!
//! - Circulation fan (single relay)
//! - Heating module (heater, grill and thermal-circuit element relays)

#![no_std]
#![deny(unsafe_code)]

pub mod fan;
pub mod gpio;
pub mod heating;

pub use fan::GpioFan;
pub use gpio::{OutputPin, Relay};
pub use heating::{ElementPins, RelayHeatingModule};
