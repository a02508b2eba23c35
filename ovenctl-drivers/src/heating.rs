//! Relay-switched heating module
//!
//! Three element relays (heater, grill, thermal circuit). Only one element
//! is energized at a time; selecting an element releases the others first.
//! Temperature regulation happens in the element's own thermostat, so each
//! call only validates the target and latches the relay.

use ovenctl_core::config::{ElementLimits, HardwareConfig};
use ovenctl_core::program::{HeatType, HeatingSettings};
use ovenctl_core::traits::{HeatingError, HeatingModule};

use crate::gpio::{OutputPin, Relay};

/// GPIO pins for the three element relays
pub struct ElementPins<P> {
    pub heater: P,
    pub grill: P,
    pub thermal_circuit: P,
}

/// Heating module driving one relay per element
pub struct RelayHeatingModule<P> {
    heater: Relay<P>,
    grill: Relay<P>,
    thermal_circuit: Relay<P>,
    limits: ElementLimits,
    /// Door switch / thermal cutout engaged
    interlocked: bool,
    /// Currently energized element and its settings
    active: Option<(HeatType, HeatingSettings)>,
}

impl<P: OutputPin> RelayHeatingModule<P> {
    /// Create a module with active-high relays
    pub fn new(pins: ElementPins<P>, limits: ElementLimits) -> Self {
        Self {
            heater: Relay::new(pins.heater, false),
            grill: Relay::new(pins.grill, false),
            thermal_circuit: Relay::new(pins.thermal_circuit, false),
            limits,
            interlocked: false,
            active: None,
        }
    }

    /// Create a module using the relay polarity from the hardware config
    pub fn from_config(
        pins: ElementPins<P>,
        hardware: &HardwareConfig,
        limits: ElementLimits,
    ) -> Self {
        Self {
            heater: Relay::from_config(pins.heater, &hardware.heater),
            grill: Relay::from_config(pins.grill, &hardware.grill),
            thermal_circuit: Relay::from_config(pins.thermal_circuit, &hardware.thermal_circuit),
            limits,
            interlocked: false,
            active: None,
        }
    }

    /// Currently energized element and the settings it was given
    pub fn active(&self) -> Option<(HeatType, HeatingSettings)> {
        self.active
    }

    /// Element limits in use
    pub fn limits(&self) -> &ElementLimits {
        &self.limits
    }

    /// Engage or release the safety interlock
    ///
    /// Engaging it releases every element; while engaged all heating
    /// calls fail.
    pub fn set_interlock(&mut self, engaged: bool) {
        self.interlocked = engaged;
        if engaged {
            self.shutdown();
        }
    }

    /// Check if the interlock is engaged
    pub fn is_interlocked(&self) -> bool {
        self.interlocked
    }

    /// Release all elements
    pub fn shutdown(&mut self) {
        self.heater.set_on(false);
        self.grill.set_on(false);
        self.thermal_circuit.set_on(false);
        self.active = None;
    }

    /// Check if the relay for `element` is energized
    pub fn is_energized(&self, element: HeatType) -> bool {
        self.relay(element).is_on()
    }

    fn relay(&self, element: HeatType) -> &Relay<P> {
        match element {
            HeatType::Heater => &self.heater,
            HeatType::Grill => &self.grill,
            HeatType::ThermoCirculation => &self.thermal_circuit,
        }
    }

    fn relay_mut(&mut self, element: HeatType) -> &mut Relay<P> {
        match element {
            HeatType::Heater => &mut self.heater,
            HeatType::Grill => &mut self.grill,
            HeatType::ThermoCirculation => &mut self.thermal_circuit,
        }
    }

    fn energize(
        &mut self,
        element: HeatType,
        settings: HeatingSettings,
    ) -> Result<(), HeatingError> {
        if self.interlocked {
            return Err(HeatingError::Interlock);
        }

        let limit_c = self.limits.limit_for(element);
        if settings.target_temp_c > limit_c {
            return Err(HeatingError::TargetOutOfRange {
                element,
                target_c: settings.target_temp_c,
                limit_c,
            });
        }

        self.shutdown();

        let relay = self.relay_mut(element);
        relay.set_on(true);
        if !relay.is_latched() {
            relay.set_on(false);
            return Err(HeatingError::ElementFault(element));
        }

        self.active = Some((element, settings));
        Ok(())
    }
}

impl<P: OutputPin> HeatingModule for RelayHeatingModule<P> {
    fn heater(&mut self, settings: HeatingSettings) -> Result<(), HeatingError> {
        self.energize(HeatType::Heater, settings)
    }

    fn grill(&mut self, settings: HeatingSettings) -> Result<(), HeatingError> {
        self.energize(HeatType::Grill, settings)
    }

    fn thermal_circuit(&mut self, settings: HeatingSettings) -> Result<(), HeatingError> {
        self.energize(HeatType::ThermoCirculation, settings)
    }
}
