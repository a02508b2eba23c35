//! Program stages

use core::fmt;

use super::settings::HeatingSettings;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Heat source used by a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HeatType {
    /// Top and bottom heater elements, fan off
    #[default]
    Heater,
    /// Grill element, fan off
    Grill,
    /// Ring element with the fan circulating air
    ThermoCirculation,
}

impl HeatType {
    /// Check if this heat source needs the fan running
    pub fn needs_fan(&self) -> bool {
        matches!(self, HeatType::ThermoCirculation)
    }
}

impl fmt::Display for HeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeatType::Heater => "heater",
            HeatType::Grill => "grill",
            HeatType::ThermoCirculation => "thermo-circulation",
        };
        f.write_str(name)
    }
}

/// One phase of a baking program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramStage {
    /// Heat source for this stage
    pub heat_type: HeatType,
    /// Target temperature in °C
    pub target_temp_c: i16,
    /// Stage duration in minutes
    pub stage_time_minutes: u16,
}

impl ProgramStage {
    /// Create a new stage
    pub const fn new(heat_type: HeatType, target_temp_c: i16, stage_time_minutes: u16) -> Self {
        Self {
            heat_type,
            target_temp_c,
            stage_time_minutes,
        }
    }

    /// Heater stage
    pub const fn heater(target_temp_c: i16, stage_time_minutes: u16) -> Self {
        Self::new(HeatType::Heater, target_temp_c, stage_time_minutes)
    }

    /// Grill stage
    pub const fn grill(target_temp_c: i16, stage_time_minutes: u16) -> Self {
        Self::new(HeatType::Grill, target_temp_c, stage_time_minutes)
    }

    /// Thermo-circulation stage
    pub const fn thermo(target_temp_c: i16, stage_time_minutes: u16) -> Self {
        Self::new(HeatType::ThermoCirculation, target_temp_c, stage_time_minutes)
    }

    /// Settings for this stage's heating call
    pub const fn settings(&self) -> HeatingSettings {
        HeatingSettings::new(self.target_temp_c, self.stage_time_minutes)
    }
}
