//! TOML configuration parsing
//!
//! Example:
//!
//! ```toml
//! [limits]
//! heater_max_c = 250
//! grill_max_c = 300
//! thermo_max_c = 230
//!
//! [hardware]
//! fan = { pin = 2 }
//! heater = { pin = 3, inverted = true }
//!
//! [[programs]]
//! label = "Bread"
//! initial_temp_c = 180
//! cool_at_finish = true
//! stages = [
//!     { heat_type = "thermo_circulation", target_temp_c = 200, stage_time_minutes = 25 },
//!     { heat_type = "grill", target_temp_c = 240, stage_time_minutes = 5 },
//! ]
//! ```
//!
//! Omitted sections fall back to their defaults.

use super::error::ConfigError;
use super::types::OvenConfig;

/// Parse and validate a TOML configuration
pub fn parse_config(text: &str) -> Result<OvenConfig, ConfigError> {
    let config: OvenConfig = ::toml::from_str(text).map_err(ConfigError::Toml)?;
    config.validate()?;

    info!("Parsed TOML config with {} programs", config.programs.len());
    Ok(config)
}
