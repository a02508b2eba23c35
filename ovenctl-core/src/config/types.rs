//! Configuration type definitions
//!
//! These types represent the oven configuration. Configuration is written
//! by hand as TOML and stored in flash as postcard-serialized binary data.

use heapless::{String, Vec};

use super::error::ConfigError;
use crate::program::{BakingProgram, HeatType, ProgramStage, MAX_STAGES};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_VERSION: u8 = 1;

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 16;

/// Maximum programs per config
pub const MAX_PROGRAMS: usize = 8;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create an active-high pin
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// Relay pins for the fan and the three heating elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HardwareConfig {
    pub fan: PinConfig,
    pub heater: PinConfig,
    pub grill: PinConfig,
    pub thermal_circuit: PinConfig,
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            fan: PinConfig::new(2),
            heater: PinConfig::new(3),
            grill: PinConfig::new(4),
            thermal_circuit: PinConfig::new(5),
        }
    }
}

/// Maximum target temperature each element is rated for (°C)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElementLimits {
    pub heater_max_c: i16,
    pub grill_max_c: i16,
    pub thermo_max_c: i16,
}

impl ElementLimits {
    /// Limit for the element driven by `heat_type`
    pub fn limit_for(&self, heat_type: HeatType) -> i16 {
        match heat_type {
            HeatType::Heater => self.heater_max_c,
            HeatType::Grill => self.grill_max_c,
            HeatType::ThermoCirculation => self.thermo_max_c,
        }
    }
}

impl Default for ElementLimits {
    fn default() -> Self {
        Self {
            heater_max_c: 250,
            grill_max_c: 300,
            thermo_max_c: 250,
        }
    }
}

/// Stored baking program
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramConfig {
    /// Display label
    pub label: String<MAX_LABEL_LEN>,
    /// Warm-up temperature (°C)
    pub initial_temp_c: i16,
    /// Stages in execution order
    pub stages: Vec<ProgramStage, MAX_STAGES>,
    /// Run the fan after the last stage
    #[cfg_attr(feature = "serde", serde(default))]
    pub cool_at_finish: bool,
}

impl ProgramConfig {
    /// Build the executable program
    pub fn to_program(&self) -> BakingProgram {
        BakingProgram {
            initial_temp_c: self.initial_temp_c,
            stages: self.stages.clone(),
            cool_at_finish: self.cool_at_finish,
        }
    }
}

/// Complete oven configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OvenConfig {
    /// Format version, checked on load
    pub version: u8,
    /// Element temperature limits
    pub limits: ElementLimits,
    /// Relay wiring
    pub hardware: HardwareConfig,
    /// Program library
    pub programs: Vec<ProgramConfig, MAX_PROGRAMS>,
}

impl Default for OvenConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            limits: ElementLimits::default(),
            hardware: HardwareConfig::default(),
            programs: Vec::new(),
        }
    }
}

impl OvenConfig {
    /// Look up a program by label
    pub fn program(&self, label: &str) -> Option<&ProgramConfig> {
        self.programs.iter().find(|p| p.label.as_str() == label)
    }

    /// Check version, labels, warm-up and every stage against the element limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch {
                found: self.version,
                expected: CONFIG_VERSION,
            });
        }

        for (index, program) in self.programs.iter().enumerate() {
            if self.programs[..index]
                .iter()
                .any(|p| p.label == program.label)
            {
                return Err(ConfigError::DuplicateLabel { program: index });
            }

            // Warm-up always drives the heater
            if program.initial_temp_c > self.limits.heater_max_c {
                return Err(ConfigError::WarmUpOverLimit {
                    program: index,
                    target_c: program.initial_temp_c,
                    limit_c: self.limits.heater_max_c,
                });
            }

            for (stage_index, stage) in program.stages.iter().enumerate() {
                let limit_c = self.limits.limit_for(stage.heat_type);
                if stage.target_temp_c > limit_c {
                    return Err(ConfigError::StageOverLimit {
                        program: index,
                        stage: stage_index,
                        heat_type: stage.heat_type,
                        target_c: stage.target_temp_c,
                        limit_c,
                    });
                }
            }
        }

        Ok(())
    }
}
