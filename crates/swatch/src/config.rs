//! Switcher configuration.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::theme::ThemeName;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Settings for a [`ThemeSwitcher`](crate::ThemeSwitcher).
///
/// Every field has a default, so an empty document is a valid configuration.
///
/// # Example
///
/// ```rust
/// use swatch::{SwitcherConfig, ThemeName};
///
/// let config = SwitcherConfig::from_yaml_str("default_theme: midnight").unwrap();
/// assert_eq!(config.default_theme, ThemeName::Midnight);
/// assert_eq!(config.storage_key, "theme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitcherConfig {
    /// Key the selected identifier is persisted under.
    pub storage_key: String,
    /// Theme applied when nothing else is selected, and for unknown identifiers.
    pub default_theme: ThemeName,
}

impl SwitcherConfig {
    /// Parses a YAML configuration document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_theme: ThemeName::default(),
        }
    }
}
