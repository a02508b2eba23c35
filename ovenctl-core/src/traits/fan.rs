//! Circulation fan trait

/// Trait for the oven's air-circulation fan
///
/// Fan operations are treated as infallible. Implementations that can
/// detect a fault should surface it through their own diagnostics.
pub trait Fan {
    /// Start the fan
    fn on(&mut self);

    /// Stop the fan
    fn off(&mut self);

    /// Check if the fan is currently running
    fn is_on(&self) -> bool;
}

impl<T: Fan + ?Sized> Fan for &mut T {
    fn on(&mut self) {
        (**self).on()
    }

    fn off(&mut self) {
        (**self).off()
    }

    fn is_on(&self) -> bool {
        (**self).is_on()
    }
}
