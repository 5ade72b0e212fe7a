//! # Codec Configuration
//!
//! Deployment-tunable settings for [`MessageCodec`](crate::MessageCodec), loadable
//! from TOML:
//!
//! ```toml
//! version = 3
//! default_priority = 6
//! max_data_size = 4079
//! verify_data_size = true
//! ```
//!
//! Missing keys take their defaults.

use crate::message::header::{DEFAULT_PRIORITY, MAX_PRIORITY};
use jaus_codec::{JausVersion, MAX_DATA_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Envelope codec settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Raw protocol version stamped on outgoing headers
    pub version: u8,
    /// Priority for messages built by the codec
    pub default_priority: u8,
    /// Largest body the codec will encode, at most 4079
    pub max_data_size: usize,
    /// Reject inbound messages whose body length disagrees with the header
    pub verify_data_size: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            version: JausVersion::MAX.raw(),
            default_priority: DEFAULT_PRIORITY,
            max_data_size: MAX_DATA_SIZE,
            verify_data_size: true,
        }
    }
}

impl CodecConfig {
    pub fn jaus_version(&self) -> JausVersion {
        JausVersion::new(self.version)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.jaus_version().is_supported() || self.version > JausVersion::MAX.raw() {
            return Err(ConfigError::Invalid(format!(
                "version {} is newer than {}",
                self.version,
                JausVersion::MAX.raw()
            )));
        }
        if self.default_priority > MAX_PRIORITY {
            return Err(ConfigError::Invalid(format!(
                "default_priority {} exceeds {MAX_PRIORITY}",
                self.default_priority
            )));
        }
        if self.max_data_size > MAX_DATA_SIZE {
            return Err(ConfigError::Invalid(format!(
                "max_data_size {} exceeds {MAX_DATA_SIZE}",
                self.max_data_size
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.as_ref().display(), version = %config.jaus_version(), "codec config loaded");
        Ok(config)
    }
}
