//! GPIO relay output
//!
//! Relays are driven directly or via an SSR/MOSFET on a single pin, which
//! can be active-high or active-low.

use ovenctl_core::config::PinConfig;

/// Trait for GPIO pin abstraction
pub trait OutputPin {
    /// Set the pin high
    fn set_high(&mut self);

    /// Set the pin low
    fn set_low(&mut self);

    /// Check if the pin is set high
    ///
    /// Implementations backed by a readback input should report the
    /// measured level, not the commanded one.
    fn is_set_high(&self) -> bool;

    /// Set the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Relay on a GPIO pin
pub struct Relay<P> {
    pin: P,
    /// If true, relay ON = pin LOW
    inverted: bool,
    /// Current logical state (true = energized)
    on: bool,
}

impl<P: OutputPin> Relay<P> {
    /// Create a new relay, forced off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, relay is ON when pin is LOW (for active-low SSRs)
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut relay = Self {
            pin,
            inverted,
            on: false,
        };
        relay.set_on(false);
        relay
    }

    /// Create a relay using the polarity from a pin config
    pub fn from_config(pin: P, config: &PinConfig) -> Self {
        Self::new(pin, config.inverted)
    }

    /// Energize or release the relay
    pub fn set_on(&mut self, on: bool) {
        self.on = on;
        // Normal: on=true, inverted=false → high
        // Inverted: on=true, inverted=true → low
        self.pin.set_state(on != self.inverted);
    }

    /// Check if the relay is commanded on
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Check if the pin level matches the commanded state
    pub fn is_latched(&self) -> bool {
        self.pin.is_set_high() == (self.on != self.inverted)
    }

    /// Get access to the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Mock GPIO pin; a stuck pin ignores every write
    pub(crate) struct MockPin {
        pub high: bool,
        pub stuck: bool,
    }

    impl MockPin {
        pub fn new() -> Self {
            Self {
                high: false,
                stuck: false,
            }
        }

        pub fn stuck_low() -> Self {
            Self {
                high: false,
                stuck: true,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.stuck {
                self.high = true;
            }
        }

        fn set_low(&mut self) {
            if !self.stuck {
                self.high = false;
            }
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_relay() {
        let mut relay = Relay::new(MockPin::new(), false);

        // Initially off
        assert!(!relay.is_on());
        assert!(!relay.pin().is_set_high());

        relay.set_on(true);
        assert!(relay.is_on());
        assert!(relay.pin().is_set_high());
        assert!(relay.is_latched());
    }

    #[test]
    fn test_active_low_relay() {
        let mut relay = Relay::from_config(MockPin::new(), &PinConfig::inverted(9));

        // Initially off (pin is high for active-low)
        assert!(!relay.is_on());
        assert!(relay.pin().is_set_high());

        // Turn on (pin goes low for active-low)
        relay.set_on(true);
        assert!(relay.is_on());
        assert!(!relay.pin().is_set_high());
        assert!(relay.is_latched());
    }

    #[test]
    fn test_stuck_pin_not_latched() {
        let mut relay = Relay::new(MockPin::stuck_low(), false);
        assert!(relay.is_latched());

        relay.set_on(true);
        assert!(!relay.is_latched());
    }
}
