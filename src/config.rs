#[cfg(feature = "serde")]
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use thiserror::Error;

use crate::{key_command::KeyBindings, string_differ::DiffOptions};

#[cfg(feature = "serde")]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Tunable behaviour of the `ReconciliationController`. Every field has a
/// default, so partial configuration files are accepted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilerConfig {
    pub diff: DiffOptions,

    /// Widen non-empty selections so that they never cover part of an atomic
    /// span.
    pub expand_selections: bool,

    pub key_bindings: KeyBindings,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            diff: DiffOptions::default(),
            expand_selections: true,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl ReconcilerConfig {
    /// Parses a YAML configuration, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed YAML or unknown values.
    #[cfg(feature = "serde")]
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(contents)?;
        debug!("Loaded reconciler configuration: {config:?}");

        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the configuration can't be serialized.
    #[cfg(feature = "serde")]
    pub fn to_yaml(&self) -> Result<String, ConfigError> { Ok(serde_yaml::to_string(self)?) }

    #[must_use]
    pub fn with_diff_options(mut self, diff: DiffOptions) -> Self {
        self.diff = diff;
        self
    }

    #[must_use]
    pub fn with_expand_selections(mut self, expand_selections: bool) -> Self {
        self.expand_selections = expand_selections;
        self
    }

    #[must_use]
    pub fn with_key_bindings(mut self, key_bindings: KeyBindings) -> Self {
        self.key_bindings = key_bindings;
        self
    }
}
