//! Binary configuration storage
//!
//! Configs are persisted as postcard-serialized [`OvenConfig`] values. The
//! version field is checked on load so a stale blob in flash is rejected
//! rather than misread.

use super::error::ConfigError;
use super::types::OvenConfig;

/// Maximum serialized config size (binary)
pub const MAX_CONFIG_SIZE: usize = 2048;

/// Serialize `config` into `buf`, returning the used prefix
pub fn encode_config<'a>(
    config: &OvenConfig,
    buf: &'a mut [u8],
) -> Result<&'a mut [u8], ConfigError> {
    postcard::to_slice(config, buf).map_err(|e| match e {
        postcard::Error::SerializeBufferFull => ConfigError::BufferTooSmall,
        other => ConfigError::Encode(other),
    })
}

/// Deserialize and validate a stored config
pub fn decode_config(bytes: &[u8]) -> Result<OvenConfig, ConfigError> {
    debug!("Decoding {} bytes of binary config", bytes.len());

    let config: OvenConfig = postcard::from_bytes(bytes).map_err(ConfigError::Decode)?;

    if let Err(e) = config.validate() {
        warn!("Rejecting stored config (version {})", config.version);
        return Err(e);
    }

    info!("Loaded binary config with {} programs", config.programs.len());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ElementLimits, ProgramConfig};
    use crate::program::ProgramStage;
    use heapless::{String, Vec};

    fn sample_config() -> OvenConfig {
        let mut label = String::new();
        let _ = label.push_str("Focaccia");
        let mut config = OvenConfig {
            limits: ElementLimits {
                heater_max_c: 230,
                grill_max_c: 280,
                thermo_max_c: 220,
            },
            ..Default::default()
        };
        let _ = config.programs.push(ProgramConfig {
            label,
            initial_temp_c: 200,
            stages: Vec::from_slice(&[ProgramStage::thermo(220, 18), ProgramStage::grill(260, 3)])
                .unwrap(),
            cool_at_finish: true,
        });
        config
    }

    #[test]
    fn test_stored_config_loads_back() {
        let config = sample_config();
        let mut buf = [0u8; MAX_CONFIG_SIZE];
        let used = encode_config(&config, &mut buf).unwrap().len();

        let loaded = decode_config(&buf[..used]).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_buffer_too_small() {
        let config = sample_config();
        let mut buf = [0u8; 4];
        assert!(matches!(
            encode_config(&config, &mut buf),
            Err(ConfigError::BufferTooSmall)
        ));
    }

    #[test]
    fn test_stale_version_rejected() {
        let config = OvenConfig {
            version: 0,
            ..Default::default()
        };
        let mut buf = [0u8; MAX_CONFIG_SIZE];
        let used = encode_config(&config, &mut buf).unwrap().len();

        assert!(matches!(
            decode_config(&buf[..used]),
            Err(ConfigError::VersionMismatch { found: 0, expected: 1 })
        ));
    }

    #[test]
    fn test_warm_up_over_limit_rejected() {
        let mut config = sample_config();
        config.programs[0].initial_temp_c = 240;
        let mut buf = [0u8; MAX_CONFIG_SIZE];
        let used = encode_config(&config, &mut buf).unwrap().len();

        assert!(matches!(
            decode_config(&buf[..used]),
            Err(ConfigError::WarmUpOverLimit {
                program: 0,
                target_c: 240,
                limit_c: 230,
            })
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(decode_config(&[]), Err(ConfigError::Decode(_))));
    }
}
