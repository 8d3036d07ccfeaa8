//! Configuration
//!
//! Provides [`CoreConfig`], the TOML-backed limits applied when
//! validating framework definitions and widget editor forms.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Limits applied to framework definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CoreConfig {
    /// Maximum number of primary sections
    pub max_sections: usize,
    /// Maximum widgets per section (and in the secondary list)
    pub max_widgets_per_list: usize,
    /// Minimum widget/section title length
    pub title_min_len: usize,
    /// Maximum widget/section title length
    pub title_max_len: usize,
    /// Reject frameworks with sparse display orders
    pub strict_order_check: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            max_sections: 50,
            max_widgets_per_list: 100,
            title_min_len: 1,
            title_max_len: 255,
            strict_order_check: true,
        }
    }
}

impl CoreConfig {
    /// Parse from a TOML document
    ///
    /// # Errors
    /// Syntax errors, and limits that cannot work (zero maxima).
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.check()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.max_sections == 0 {
            return Err(ConfigError::InvalidLimit {
                name: "max-sections",
                value: 0,
            });
        }
        if self.max_widgets_per_list == 0 {
            return Err(ConfigError::InvalidLimit {
                name: "max-widgets-per-list",
                value: 0,
            });
        }
        if self.title_max_len < self.title_min_len {
            return Err(ConfigError::InvalidLimit {
                name: "title-max-len",
                value: self.title_max_len,
            });
        }
        Ok(())
    }
}
