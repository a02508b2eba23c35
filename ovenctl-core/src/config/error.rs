//! Configuration errors

use crate::program::HeatType;

/// Errors loading, storing or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML text could not be parsed into a configuration
    #[cfg(feature = "toml")]
    #[error("invalid TOML config: {0}")]
    Toml(::toml::de::Error),
    /// postcard serialization failed
    #[cfg(feature = "serde")]
    #[error("failed to encode config: {0}")]
    Encode(postcard::Error),
    /// postcard deserialization failed
    #[cfg(feature = "serde")]
    #[error("failed to decode config: {0}")]
    Decode(postcard::Error),
    /// Output buffer cannot hold the encoded config
    #[error("buffer too small for encoded config")]
    BufferTooSmall,
    /// Stored config was written by an incompatible version
    #[error("config version {found} does not match expected {expected}")]
    VersionMismatch { found: u8, expected: u8 },
    /// A program stage targets more than its element allows
    #[error("program {program} stage {stage}: {heat_type} at {target_c}°C over {limit_c}°C")]
    StageOverLimit {
        program: usize,
        stage: usize,
        heat_type: HeatType,
        target_c: i16,
        limit_c: i16,
    },
    /// A program warms up hotter than the heater allows
    #[error("program {program} warm-up at {target_c}°C over heater limit {limit_c}°C")]
    WarmUpOverLimit {
        program: usize,
        target_c: i16,
        limit_c: i16,
    },
    /// Two programs share a label
    #[error("program {program} reuses an existing label")]
    DuplicateLabel { program: usize },
}
