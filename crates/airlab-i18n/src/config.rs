//! Localizer configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::locale::{DEFAULT_LOCALE, LocaleCode};
use crate::store::STORAGE_KEY;

/// Knobs for where the active locale is persisted and what to fall back to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocalizerConfig {
    /// Storage key holding the persisted locale code.
    pub storage_key: String,
    /// Locale used when nothing valid has been persisted.
    pub default_locale: LocaleCode,
}

impl Default for LocalizerConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            default_locale: DEFAULT_LOCALE,
        }
    }
}

impl LocalizerConfig {
    /// Parse and validate a JSON document; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents or unknown fields,
    /// and [`ConfigError::InvalidField`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make persistence meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when `storage_key` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "storage_key",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}
