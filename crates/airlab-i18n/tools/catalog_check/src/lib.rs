#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Audit the AirLab message catalog for drift between locales.
//!
//! # Design
//! - Resolves the catalog directory relative to `CARGO_MANIFEST_DIR` so it can be run from any cwd.
//! - Loads `<code>.json` for every supported locale; an absent file becomes a
//!   `missing_locale` finding rather than a hard failure.
//! - Reports findings as text or JSON on the given writer and signals a dirty
//!   catalog through the returned [`Report`], leaving exit codes to `main`.
//!
//! Failure modes include unreadable files, malformed JSON, and writer errors.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use airlab_i18n::{Catalog, CatalogError, CatalogIssue, LocaleCode};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Errors returned by the catalog check tool.
#[derive(Debug)]
pub enum CheckError {
    /// The catalog directory does not exist.
    MissingDir {
        /// Directory that could not be found.
        path: PathBuf,
    },
    /// Reading a catalog file failed.
    Io {
        /// Path involved in the failing IO operation.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A catalog file was not a JSON object of strings.
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying catalog error.
        source: CatalogError,
    },
    /// Serialising the JSON report failed.
    Render {
        /// Underlying serde error.
        source: serde_json::Error,
    },
    /// Writing the report failed.
    Output {
        /// Underlying IO error.
        source: io::Error,
    },
}

impl Display for CheckError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDir { path } => {
                write!(formatter, "catalog directory is missing: {}", path.display())
            }
            Self::Io { path, source } => {
                write!(formatter, "io error at {}: {source}", path.display())
            }
            Self::Parse { path, .. } => {
                write!(formatter, "catalog file failed to parse: {}", path.display())
            }
            Self::Render { .. } => formatter.write_str("failed to render json report"),
            Self::Output { .. } => formatter.write_str("failed to write report"),
        }
    }
}

impl Error for CheckError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingDir { .. } => None,
            Self::Io { source, .. } | Self::Output { source } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Render { source } => Some(source),
        }
    }
}

/// Report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One finding per line.
    Text,
    /// A single JSON document.
    Json,
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "catalog_check",
    about = "Audit AirLab message catalogs for missing keys and encoding damage"
)]
pub struct Cli {
    /// Directory holding `<code>.json` catalogs; defaults to the embedded catalog sources.
    #[arg(long, env = "AIRLAB_CATALOG_DIR")]
    pub dir: Option<PathBuf>,
    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, default_value = airlab_telemetry::DEFAULT_LOG_LEVEL)]
    pub log_level: String,
    /// Log output format (`pretty` or `json`).
    #[arg(long, default_value = "pretty")]
    pub log_format: String,
}

/// Outcome of auditing one catalog directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Directory that was audited.
    pub dir: PathBuf,
    /// Locales whose file was found.
    pub locales: Vec<LocaleCode>,
    /// Number of distinct keys across all locales.
    pub keys: usize,
    /// Keys actually present in each loaded locale.
    pub key_counts: Vec<LocaleKeys>,
    /// Findings, sorted by locale then key.
    pub issues: Vec<CatalogIssue>,
}

/// Key count for a single locale file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleKeys {
    /// Locale the count belongs to.
    pub locale: LocaleCode,
    /// Keys defined in that locale's file.
    pub keys: usize,
}

impl Report {
    /// Whether the audit found nothing.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Catalog sources shipped with `airlab-i18n`.
#[must_use]
pub fn default_catalog_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .map_or_else(|| manifest_dir.join("i18n"), |crate_root| crate_root.join("i18n"))
}

/// Load and audit every supported locale found in `dir`.
///
/// # Errors
/// Returns an error if the directory is missing, a file cannot be read, or a
/// file is not a JSON object of strings.
pub fn check_dir(dir: &Path) -> Result<Report, CheckError> {
    if !dir.is_dir() {
        return Err(CheckError::MissingDir {
            path: dir.to_path_buf(),
        });
    }

    let mut sources = Vec::new();
    for locale in LocaleCode::all() {
        let path = locale_path(dir, locale);
        if !path.is_file() {
            warn!(path = %path.display(), %locale, "catalog file not found");
            continue;
        }
        let raw = fs::read_to_string(&path).map_err(|source| CheckError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = raw.len(), "loaded catalog file");
        sources.push((locale, raw));
    }

    let borrowed: Vec<(LocaleCode, &str)> = sources
        .iter()
        .map(|(locale, raw)| (*locale, raw.as_str()))
        .collect();
    let catalog = Catalog::from_sources(&borrowed).map_err(|source| {
        let path = match &source {
            CatalogError::Parse { locale, .. } => locale_path(dir, *locale),
            CatalogError::Incomplete { .. } => dir.to_path_buf(),
        };
        CheckError::Parse { path, source }
    })?;

    let report = Report {
        dir: dir.to_path_buf(),
        locales: catalog.locales().collect(),
        keys: catalog.all_keys().len(),
        key_counts: catalog
            .locales()
            .map(|locale| LocaleKeys {
                locale,
                keys: catalog.keys(locale).count(),
            })
            .collect(),
        issues: catalog.audit(),
    };
    info!(
        dir = %dir.display(),
        locales = report.locales.len(),
        keys = report.keys,
        issues = report.issues.len(),
        "catalog audit finished"
    );
    Ok(report)
}

fn locale_path(dir: &Path, locale: LocaleCode) -> PathBuf {
    dir.join(format!("{}.json", locale.code()))
}

/// Render `report` in the requested format.
///
/// # Errors
/// Returns [`CheckError::Render`] if JSON serialisation fails.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, CheckError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).map_err(|source| CheckError::Render { source })
        }
        OutputFormat::Text => {
            let mut text = format!(
                "{}: {} locale(s), {} key(s)\n",
                report.dir.display(),
                report.locales.len(),
                report.keys
            );
            for count in &report.key_counts {
                text.push_str(&format!("  {}: {} key(s)\n", count.locale, count.keys));
            }
            if report.is_clean() {
                text.push_str("catalog is complete\n");
            } else {
                for issue in &report.issues {
                    text.push_str(&issue.describe());
                    text.push('\n');
                }
                text.push_str(&format!("{} issue(s) found\n", report.issues.len()));
            }
            Ok(text)
        }
    }
}

/// Audit the configured directory and write the report to `out`.
///
/// # Errors
/// Returns an error if loading, rendering, or writing the report fails.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Report, CheckError> {
    let dir = cli.dir.clone().unwrap_or_else(default_catalog_dir);
    let report = check_dir(&dir)?;
    let rendered = render(&report, cli.format)?;
    out.write_all(rendered.as_bytes())
        .map_err(|source| CheckError::Output { source })?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    type TestResult = Result<(), Box<dyn Error>>;

    fn write_catalog(dir: &Path, locale: LocaleCode, body: &str) -> io::Result<()> {
        fs::write(dir.join(format!("{}.json", locale.code())), body)
    }

    fn cli_for(dir: &Path, format: OutputFormat) -> Cli {
        Cli {
            dir: Some(dir.to_path_buf()),
            format,
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }

    #[test]
    fn shipped_catalog_is_clean() -> TestResult {
        let report = check_dir(&default_catalog_dir())?;
        assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
        assert_eq!(report.locales, LocaleCode::all().to_vec());
        assert!(report.keys > 40);
        Ok(())
    }

    #[test]
    fn drift_between_locales_is_reported() -> TestResult {
        let temp = TempDir::new()?;
        write_catalog(
            temp.path(),
            LocaleCode::En,
            r#"{"signalsPage": "Digital Signals", "signalsTitle": "Signals"}"#,
        )?;
        write_catalog(temp.path(), LocaleCode::Pt, r#"{"signalsPage": "Sinais"}"#)?;

        let mut out = Vec::new();
        let report = run(&cli_for(temp.path(), OutputFormat::Text), &mut out)?;
        assert!(!report.is_clean());
        assert_eq!(
            report.issues,
            vec![CatalogIssue::MissingKey {
                locale: LocaleCode::Pt,
                key: "signalsTitle".to_string(),
            }]
        );
        assert_eq!(
            report.key_counts,
            vec![
                LocaleKeys {
                    locale: LocaleCode::En,
                    keys: 2,
                },
                LocaleKeys {
                    locale: LocaleCode::Pt,
                    keys: 1,
                },
            ]
        );
        let text = String::from_utf8(out)?;
        assert!(text.contains("  en: 2 key(s)\n  pt: 1 key(s)\n"));
        assert!(text.contains("[pt] missing key `signalsTitle`"));
        assert!(text.contains("1 issue(s) found"));
        Ok(())
    }

    #[test]
    fn absent_locale_file_is_a_finding() -> TestResult {
        let temp = TempDir::new()?;
        write_catalog(temp.path(), LocaleCode::En, r#"{"title": "AirLab"}"#)?;

        let report = check_dir(temp.path())?;
        assert_eq!(report.locales, vec![LocaleCode::En]);
        assert_eq!(
            report.issues,
            vec![CatalogIssue::MissingLocale {
                locale: LocaleCode::Pt
            }]
        );
        Ok(())
    }

    #[test]
    fn json_report_lists_issue_kinds() -> TestResult {
        let temp = TempDir::new()?;
        write_catalog(temp.path(), LocaleCode::En, r#"{"vacuum1": "Vacuum 1"}"#)?;
        write_catalog(temp.path(), LocaleCode::Pt, r#"{"vacuum1": "VÃ¡cuo 1"}"#)?;

        let mut out = Vec::new();
        run(&cli_for(temp.path(), OutputFormat::Json), &mut out)?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value["keys"], 1);
        assert_eq!(value["key_counts"][1]["locale"], "pt");
        assert_eq!(value["key_counts"][1]["keys"], 1);
        assert_eq!(value["issues"][0]["kind"], "suspect_encoding");
        assert_eq!(value["issues"][0]["locale"], "pt");
        Ok(())
    }

    #[test]
    fn malformed_file_is_a_hard_error() -> TestResult {
        let temp = TempDir::new()?;
        write_catalog(temp.path(), LocaleCode::En, "[1, 2, 3]")?;

        let result = check_dir(temp.path());
        assert!(
            matches!(result, Err(CheckError::Parse { .. })),
            "expected Parse error, got {result:?}"
        );
        Ok(())
    }

    #[test]
    fn missing_directory_is_reported() -> TestResult {
        let temp = TempDir::new()?;
        let result = check_dir(&temp.path().join("absent"));
        assert!(matches!(result, Err(CheckError::MissingDir { .. })));
        Ok(())
    }

    #[test]
    fn clean_catalog_prints_summary() -> TestResult {
        let temp = TempDir::new()?;
        write_catalog(temp.path(), LocaleCode::En, r#"{"statusOn": "ON"}"#)?;
        write_catalog(temp.path(), LocaleCode::Pt, r#"{"statusOn": "LIGADO"}"#)?;

        let report = check_dir(temp.path())?;
        let text = render(&report, OutputFormat::Text)?;
        assert!(text.ends_with("catalog is complete\n"));
        assert!(text.contains("2 locale(s), 1 key(s)"));
        Ok(())
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["catalog_check", "--format", "json", "--dir", "/tmp/i18n"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/i18n")));
        assert_eq!(cli.log_level, "info");
    }
}
