//! Settings for stock rebalancing runs.
//!
//! Load settings from TOML or YAML files to control transfer limits and
//! priority locations without code changes.
//!
//! # Examples
//!
//! Parse settings from a TOML string:
//!
//! ```
//! use restock_config::RebalanceSettings;
//!
//! let settings = RebalanceSettings::from_toml_str(r#"
//!     max_outgoing_transfers = 4
//!     min_products_per_transfer = 20
//!     destock_locations = ["Oslo"]
//! "#).unwrap();
//!
//! assert_eq!(settings.max_outgoing_transfers, 4);
//! assert!(settings.destock_locations.contains("Oslo"));
//! ```
//!
//! Use defaults when no file is given:
//!
//! ```
//! use restock_config::RebalanceSettings;
//!
//! let settings = RebalanceSettings::default();
//! assert_eq!(settings.max_outgoing_transfers, 10);
//! assert_eq!(settings.min_products_per_transfer, 1);
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cap on transfers sent by one location.
pub const DEFAULT_MAX_OUTGOING_TRANSFERS: u32 = 10;

/// Default minimum item count for a transfer to be worth committing.
pub const DEFAULT_MIN_PRODUCTS_PER_TRANSFER: u32 = 1;

/// Settings error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid settings: {0}")]
    Invalid(String),
}

/// Settings for a rebalancing run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct RebalanceSettings {
    /// Each location may send at most this many transfers per run.
    pub max_outgoing_transfers: u32,

    /// A candidate transfer moving fewer items than this is never
    /// committed.
    pub min_products_per_transfer: u32,

    /// Locations whose shelves are replenished before any other pairing
    /// is considered.
    pub secure_locations: BTreeSet<String>,

    /// Locations whose excess stock is moved out before any other
    /// pairing is considered.
    pub destock_locations: BTreeSet<String>,
}

impl Default for RebalanceSettings {
    fn default() -> Self {
        RebalanceSettings {
            max_outgoing_transfers: DEFAULT_MAX_OUTGOING_TRANSFERS,
            min_products_per_transfer: DEFAULT_MIN_PRODUCTS_PER_TRANSFER,
            secure_locations: BTreeSet::new(),
            destock_locations: BTreeSet::new(),
        }
    }
}

impl RebalanceSettings {
    /// Creates default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or contains invalid
    /// TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads settings from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses settings from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads settings from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses settings from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the outgoing-transfer cap.
    pub fn with_max_outgoing_transfers(mut self, limit: u32) -> Self {
        self.max_outgoing_transfers = limit;
        self
    }

    /// Sets the minimum item count per transfer.
    pub fn with_min_products_per_transfer(mut self, minimum: u32) -> Self {
        self.min_products_per_transfer = minimum;
        self
    }

    /// Adds a location whose shelves are replenished first.
    pub fn with_secure_location(mut self, location: impl Into<String>) -> Self {
        self.secure_locations.insert(location.into());
        self
    }

    /// Adds a location whose excess stock is moved out first.
    pub fn with_destock_location(mut self, location: impl Into<String>) -> Self {
        self.destock_locations.insert(location.into());
        self
    }

    /// True when any priority location list is non-empty.
    pub fn has_priority_locations(&self) -> bool {
        !self.secure_locations.is_empty() || !self.destock_locations.is_empty()
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric knob is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_outgoing_transfers == 0 {
            return Err(ConfigError::Invalid(
                "max_outgoing_transfers must be at least 1".into(),
            ));
        }
        if self.min_products_per_transfer == 0 {
            return Err(ConfigError::Invalid(
                "min_products_per_transfer must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
