//! Error types for localization operations.

use thiserror::Error;

use crate::catalog::CatalogIssue;
use crate::locale::LocaleCode;

/// Raised when a language tag does not name a supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// Tag did not map to any supported locale.
    #[error("unsupported locale tag: {tag}")]
    Unsupported {
        /// Tag supplied by the caller.
        tag: String,
    },
}

/// Errors raised by durable locale storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Backing storage is not reachable (no window, private mode, sandbox).
    #[error("locale storage unavailable")]
    Unavailable {
        /// Detail reported by the host environment.
        detail: String,
    },
    /// Storage refused the write (quota, permissions).
    #[error("locale storage rejected write to {key}")]
    WriteRejected {
        /// Storage key that could not be written.
        key: String,
        /// Detail reported by the host environment.
        detail: String,
    },
}

/// Errors raised while building or validating a message catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A locale source was not a JSON object of strings.
    #[error("failed to parse catalog for locale {locale}")]
    Parse {
        /// Locale whose source failed to parse.
        locale: LocaleCode,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The catalog failed its completeness/encoding audit.
    #[error("catalog failed validation with {} issue(s)", issues.len())]
    Incomplete {
        /// Issues found by the audit.
        issues: Vec<CatalogIssue>,
    },
}

/// Errors raised while loading localizer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration document was not valid JSON for the schema.
    #[error("failed to parse localizer configuration")]
    Parse {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Field contained an invalid value.
    #[error("invalid localizer configuration field {field}: {reason}")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}
