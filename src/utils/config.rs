//! Registry configuration management

use crate::core::DEFAULT_MAX_ANCHORS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Policy applied when an insert names an address that is already tracked
///
/// The firmware this registry descends from silently appended a second
/// record, which lookup could never reach. Both policies here are explicit
/// replacements for that behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Refuse the insert and report `DuplicateAddress`
    Reject,
    /// Re-initialize the existing record in place, keeping its slot
    Replace,
}

/// Registry-wide configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Upper bound on simultaneously tracked anchors
    pub max_anchors: usize,
    /// What an insert does when the address is already tracked
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_anchors: DEFAULT_MAX_ANCHORS,
            duplicate_policy: DuplicatePolicy::Reject,
        }
    }
}

impl RegistryConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the anchor bound
    pub fn with_max_anchors(mut self, max_anchors: usize) -> Self {
        self.max_anchors = max_anchors;
        self
    }

    /// Set the duplicate-address policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Check the configuration for usable parameter values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_anchors == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "max_anchors".to_string(),
                value: "0".to_string(),
                reason: "a registry must be able to track at least one anchor".to_string(),
            });
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            message: e.to_string(),
        })?;

        let config: Self =
            serde_json::from_str(&contents).map_err(|e| ConfigError::Serialization {
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Write the configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization {
                message: e.to_string(),
            })?;

        fs::write(path, contents).map_err(|e| ConfigError::Io {
            message: e.to_string(),
        })
    }
}

/// Configuration errors
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Configuration file I/O error
    Io { message: String },
    /// JSON serialization/deserialization error
    Serialization { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "invalid {} = {}: {}", parameter, value, reason)
            }
            ConfigError::Io { message } => write!(f, "config file I/O error: {}", message),
            ConfigError::Serialization { message } => {
                write!(f, "config serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
