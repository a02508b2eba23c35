//! Heating module trait

use crate::program::{HeatType, HeatingSettings};

/// Errors raised by the heating hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeatingError {
    /// Element relay did not latch when energized
    #[error("{0} element did not respond")]
    ElementFault(HeatType),
    /// Requested temperature exceeds what the element is rated for
    #[error("{element} target {target_c}°C exceeds limit of {limit_c}°C")]
    TargetOutOfRange {
        element: HeatType,
        target_c: i16,
        limit_c: i16,
    },
    /// Safety interlock (door open, thermal cutout) prevented operation
    #[error("safety interlock engaged")]
    Interlock,
}

/// Trait for the oven's heating subsystem
///
/// Each operation drives one heat source to the requested target for the
/// requested duration and blocks until the hardware has accepted it.
pub trait HeatingModule {
    /// Drive the bottom/top heater elements
    fn heater(&mut self, settings: HeatingSettings) -> Result<(), HeatingError>;

    /// Drive the grill element
    fn grill(&mut self, settings: HeatingSettings) -> Result<(), HeatingError>;

    /// Drive the ring element used for thermo-circulation
    ///
    /// The fan is expected to be running while this element is active.
    fn thermal_circuit(&mut self, settings: HeatingSettings) -> Result<(), HeatingError>;
}

impl<T: HeatingModule + ?Sized> HeatingModule for &mut T {
    fn heater(&mut self, settings: HeatingSettings) -> Result<(), HeatingError> {
        (**self).heater(settings)
    }

    fn grill(&mut self, settings: HeatingSettings) -> Result<(), HeatingError> {
        (**self).grill(settings)
    }

    fn thermal_circuit(&mut self, settings: HeatingSettings) -> Result<(), HeatingError> {
        (**self).thermal_circuit(settings)
    }
}
