//! Relay-switched circulation fan

use ovenctl_core::config::PinConfig;
use ovenctl_core::traits::Fan;

use crate::gpio::{OutputPin, Relay};

/// Circulation fan on a single relay
pub struct GpioFan<P> {
    relay: Relay<P>,
}

impl<P: OutputPin> GpioFan<P> {
    /// Create a new fan, initially off
    pub fn new(pin: P, inverted: bool) -> Self {
        Self {
            relay: Relay::new(pin, inverted),
        }
    }

    /// Create a fan using the polarity from a pin config
    pub fn from_config(pin: P, config: &PinConfig) -> Self {
        Self {
            relay: Relay::from_config(pin, config),
        }
    }

    /// Get access to the underlying relay
    pub fn relay(&self) -> &Relay<P> {
        &self.relay
    }
}

impl<P: OutputPin> Fan for GpioFan<P> {
    fn on(&mut self) {
        self.relay.set_on(true);
    }

    fn off(&mut self) {
        self.relay.set_on(false);
    }

    fn is_on(&self) -> bool {
        self.relay.is_on()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::tests::MockPin;

    #[test]
    fn test_fan_switching() {
        let mut fan = GpioFan::new(MockPin::new(), false);
        assert!(!fan.is_on());

        fan.on();
        assert!(fan.is_on());
        assert!(fan.relay().pin().is_set_high());

        // Repeated on is harmless
        fan.on();
        assert!(fan.is_on());

        fan.off();
        assert!(!fan.is_on());
        assert!(!fan.relay().pin().is_set_high());
    }

    #[test]
    fn test_inverted_fan() {
        let mut fan = GpioFan::from_config(MockPin::new(), &PinConfig::inverted(2));
        assert!(fan.relay().pin().is_set_high());

        fan.on();
        assert!(fan.is_on());
        assert!(!fan.relay().pin().is_set_high());
    }
}
