//! Logging setup failures.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;

/// Result alias for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Errors raised while installing the log pipeline.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter `{directive}`")]
    InvalidDirective {
        /// Directive as supplied by the caller.
        directive: String,
        /// Parser error from `tracing-subscriber`.
        #[source]
        source: ParseError,
    },
    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber")]
    SubscriberInstall {
        /// Underlying install error.
        #[source]
        source: TryInitError,
    },
}
