use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

use crate::crc::{CrcError, INITIAL_VALUE};
use crate::payload::{Payload, calculate_crc8_payload};


pub const CONFIG_FILE: &str = "crc8.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A named byte sequence to checksum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub name: String,
    pub data: Payload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<u8>,
}

impl Vector {
    /// returns the CRC of `data`, checked against `expected` if given
    pub fn evaluate(&self) -> Result<u8, CrcError> {
        let actual = calculate_crc8_payload(&self.data, INITIAL_VALUE, true)?;
        match self.expected {
            Some(expected) if expected != actual => Err(CrcError::Mismatch { expected, actual }),
            _ => Ok(actual),
        }
    }
}

fn default_self_test() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_self_test")]
    pub self_test: bool,
    #[serde(default)]
    pub vectors: Vec<Vector>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            self_test: default_self_test(),
            vectors: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let opts = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        let config = opts.from_str(content)?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Io(std::io::Error::other(e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
