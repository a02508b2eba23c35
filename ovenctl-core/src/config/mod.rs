//! Configuration types
//!
//! Oven configuration: element limits, relay pins and the program
//! library. Parsed from TOML on the host and stored as postcard binary
//! data in flash.

pub mod error;
#[cfg(feature = "serde")]
pub mod storage;
#[cfg(feature = "toml")]
pub mod toml;
pub mod types;

pub use error::ConfigError;
#[cfg(feature = "serde")]
pub use storage::{decode_config, encode_config};
#[cfg(feature = "toml")]
pub use self::toml::parse_config;
pub use types::*;
