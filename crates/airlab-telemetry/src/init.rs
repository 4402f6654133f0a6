//! Tracing subscriber installation for AirLab tools.
//!
//! # Design
//! - `RUST_LOG` wins when set; otherwise the configured directive is parsed and
//!   rejected up front if malformed, so a typo never silences logging.
//! - Records go to stderr; stdout stays free for reports.

use std::io;

use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, TelemetryError};

/// Filter used when neither `RUST_LOG` nor a flag supplies one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// How and how much to log.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Filter directive such as `info` or `airlab_i18n=debug,warn`.
    pub level: &'a str,
    /// Record layout.
    pub format: LogFormat,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            format: LogFormat::infer(),
        }
    }
}

/// Record layout written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per record.
    Json,
    /// Human-readable lines.
    Pretty,
}

impl LogFormat {
    /// Pretty in debug builds, JSON in release builds.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }

    /// Map a flag value; unknown names fall back to [`LogFormat::infer`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" | "text" => Self::Pretty,
            _ => Self::infer(),
        }
    }

    fn layer<S>(self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + 'static,
    {
        let base = fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_ids(false);
        match self {
            Self::Json => base.json().boxed(),
            Self::Pretty => base.boxed(),
        }
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidDirective`] when `RUST_LOG` is unset and
/// the configured level does not parse, and
/// [`TelemetryError::SubscriberInstall`] when a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config.level)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(config.format.layer())
        .try_init()
        .map_err(|source| TelemetryError::SubscriberInstall { source })
}

fn env_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|source| TelemetryError::InvalidDirective {
        directive: level.to_string(),
        source,
    })
}
