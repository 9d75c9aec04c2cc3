//! Driver configuration.

use crate::core::{Clock, StateId, DEFAULT_MODULUS};
use crate::machine::FsmError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] FsmError),
}

/// How the driver runs the machine.
///
/// Every field has a default, so `{}` is a valid config.
///
/// # Example
///
/// ```rust
/// use agent_fsm::config::MachineConfig;
/// use agent_fsm::core::StateId;
///
/// let config = MachineConfig::from_json(r#"{ "modulus": 24, "initial": "Quiet" }"#).unwrap();
/// assert_eq!(config.modulus, 24);
/// assert_eq!(config.ticks(), 24);
/// assert_eq!(config.initial, StateId::Quiet);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Clock cycle length.
    pub modulus: u32,
    /// Number of ticks the driver runs. Defaults to one full clock cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<u32>,
    /// State the machine starts in.
    pub initial: StateId,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            ticks: None,
            initial: StateId::Chatter,
        }
    }
}

impl MachineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn validate(&self) -> Result<(), FsmError> {
        if self.modulus == 0 {
            return Err(FsmError::InvalidModulus(self.modulus));
        }
        Ok(())
    }

    /// Ticks to run, falling back to the modulus when unset.
    pub fn ticks(&self) -> u32 {
        self.ticks.unwrap_or(self.modulus)
    }

    /// A fresh clock for this configuration.
    pub fn clock(&self) -> Result<Clock, FsmError> {
        Clock::new(self.modulus)
    }
}
