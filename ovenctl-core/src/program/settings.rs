//! Settings passed to a single heating call

/// Target temperature and duration for one heating module call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeatingSettings {
    /// Target temperature in °C
    pub target_temp_c: i16,
    /// Duration in minutes
    pub time_in_minutes: u16,
}

impl HeatingSettings {
    /// Create new heating settings
    pub const fn new(target_temp_c: i16, time_in_minutes: u16) -> Self {
        Self {
            target_temp_c,
            time_in_minutes,
        }
    }
}
