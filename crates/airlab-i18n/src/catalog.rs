//! JSON-backed message catalog with one flat bundle per locale.
//!
//! # Design
//! - Each locale ships as a flat `{ "key": "text" }` object embedded at build time.
//! - Lookups never fail: callers that need graceful degradation use [`Catalog::text`].
//! - [`Catalog::audit`] reports key-set drift and mis-decoded text so incomplete
//!   catalogs are caught by tests and `catalog_check` rather than by users.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, LazyLock};

use serde::Serialize;

use crate::error::CatalogError;
use crate::locale::LocaleCode;

type Bundle = BTreeMap<String, String>;

/// Read-only mapping from locale to message key to display string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    bundles: BTreeMap<LocaleCode, Bundle>,
}

/// A single finding from [`Catalog::audit`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    /// A supported locale has no bundle at all.
    MissingLocale {
        /// Locale without a bundle.
        locale: LocaleCode,
    },
    /// The key exists in another locale but not in this one.
    MissingKey {
        /// Locale missing the key.
        locale: LocaleCode,
        /// Absent message key.
        key: String,
    },
    /// The value is blank.
    EmptyValue {
        /// Locale holding the blank value.
        locale: LocaleCode,
        /// Message key with the blank value.
        key: String,
    },
    /// The value is just the key repeated back.
    Untranslated {
        /// Locale holding the placeholder.
        locale: LocaleCode,
        /// Message key used as its own value.
        key: String,
    },
    /// The value looks like UTF-8 text decoded as Latin-1/Windows-1252.
    SuspectEncoding {
        /// Locale holding the suspect value.
        locale: LocaleCode,
        /// Message key with the suspect value.
        key: String,
    },
}

impl CatalogIssue {
    /// Locale the issue belongs to.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        match self {
            Self::MissingLocale { locale }
            | Self::MissingKey { locale, .. }
            | Self::EmptyValue { locale, .. }
            | Self::Untranslated { locale, .. }
            | Self::SuspectEncoding { locale, .. } => *locale,
        }
    }

    /// Message key the issue belongs to, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingLocale { .. } => None,
            Self::MissingKey { key, .. }
            | Self::EmptyValue { key, .. }
            | Self::Untranslated { key, .. }
            | Self::SuspectEncoding { key, .. } => Some(key),
        }
    }

    /// One-line human-readable description.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::MissingLocale { locale } => format!("[{locale}] locale bundle is missing"),
            Self::MissingKey { locale, key } => format!("[{locale}] missing key `{key}`"),
            Self::EmptyValue { locale, key } => format!("[{locale}] `{key}` is empty"),
            Self::Untranslated { locale, key } => {
                format!("[{locale}] `{key}` repeats its key instead of a translation")
            }
            Self::SuspectEncoding { locale, key } => {
                format!("[{locale}] `{key}` looks mis-encoded")
            }
        }
    }
}

static BUILTIN: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    let sources = LocaleCode::all().map(|locale| (locale, raw_locale(locale)));
    Arc::new(Catalog::from_embedded(&sources))
});

impl Catalog {
    /// Shared catalog embedded from `i18n/<code>.json`.
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Parse one JSON object of string values per locale.
    ///
    /// A later source for the same locale replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when a source is not a JSON object whose
    /// values are all strings.
    pub fn from_sources(sources: &[(LocaleCode, &str)]) -> Result<Self, CatalogError> {
        let mut bundles = BTreeMap::new();
        for (locale, raw) in sources {
            let bundle: Bundle = serde_json::from_str(raw).map_err(|source| {
                CatalogError::Parse {
                    locale: *locale,
                    source,
                }
            })?;
            bundles.insert(*locale, bundle);
        }
        Ok(Self { bundles })
    }

    /// Parse embedded sources, degrading to an empty catalog on failure.
    ///
    /// An empty catalog echoes every key, so a broken build still renders.
    fn from_embedded(sources: &[(LocaleCode, &str)]) -> Self {
        Self::from_sources(sources).unwrap_or_else(|err| {
            tracing::error!(error = %err, "embedded catalog failed to parse; lookups will echo keys");
            Self::default()
        })
    }

    /// Raw lookup without fallback.
    #[must_use]
    pub fn lookup(&self, locale: LocaleCode, key: &str) -> Option<&str> {
        self.bundles
            .get(&locale)
            .and_then(|bundle| bundle.get(key))
            .map(String::as_str)
    }

    /// Lookup that degrades to the key itself when the locale or key is
    /// absent, or when the stored text is empty.
    #[must_use]
    pub fn text<'a>(&'a self, locale: LocaleCode, key: &'a str) -> &'a str {
        self.lookup(locale, key)
            .filter(|text| !text.is_empty())
            .unwrap_or(key)
    }

    /// Locales that have a bundle, in code order.
    pub fn locales(&self) -> impl Iterator<Item = LocaleCode> + '_ {
        self.bundles.keys().copied()
    }

    /// Keys present for `locale`, sorted.
    pub fn keys(&self, locale: LocaleCode) -> impl Iterator<Item = &str> {
        self.bundles
            .get(&locale)
            .into_iter()
            .flat_map(|bundle| bundle.keys().map(String::as_str))
    }

    /// Union of keys across every bundle, sorted and deduplicated.
    #[must_use]
    pub fn all_keys(&self) -> BTreeSet<&str> {
        self.bundles
            .values()
            .flat_map(|bundle| bundle.keys().map(String::as_str))
            .collect()
    }

    /// Check every supported locale for key parity, blank or placeholder
    /// values, and mis-decoded text. Issues come back sorted by locale, then key.
    #[must_use]
    pub fn audit(&self) -> Vec<CatalogIssue> {
        let reference = self.all_keys();
        let mut issues = Vec::new();
        for locale in LocaleCode::all() {
            let Some(bundle) = self.bundles.get(&locale) else {
                issues.push(CatalogIssue::MissingLocale { locale });
                continue;
            };
            for key in &reference {
                if !bundle.contains_key(*key) {
                    issues.push(CatalogIssue::MissingKey {
                        locale,
                        key: (*key).to_string(),
                    });
                }
            }
            for (key, value) in bundle {
                if value.trim().is_empty() {
                    issues.push(CatalogIssue::EmptyValue {
                        locale,
                        key: key.clone(),
                    });
                } else if value == key {
                    issues.push(CatalogIssue::Untranslated {
                        locale,
                        key: key.clone(),
                    });
                }
                if looks_mis_encoded(value) {
                    issues.push(CatalogIssue::SuspectEncoding {
                        locale,
                        key: key.clone(),
                    });
                }
            }
        }
        issues.sort_by(|left, right| {
            (left.locale(), left.key())
                .cmp(&(right.locale(), right.key()))
                .then_with(|| left.cmp(right))
        });
        issues
    }

    /// Fail when [`Catalog::audit`] reports anything.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Incomplete`] carrying every issue found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let issues = self.audit();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Incomplete { issues })
        }
    }
}

/// Detect the usual mojibake left behind when UTF-8 bytes were read as a
/// single-byte code page: replacement characters, `Ã`/`Â` lead bytes followed
/// by a continuation-range character, or the `â€` prefix of smart punctuation.
fn looks_mis_encoded(value: &str) -> bool {
    if value.contains('\u{FFFD}') || value.contains("â€") {
        return true;
    }
    let mut chars = value.chars().peekable();
    while let Some(current) = chars.next() {
        if matches!(current, 'Ã' | 'Â')
            && chars
                .peek()
                .is_some_and(|next| ('\u{80}'..='\u{BF}').contains(next) || is_cp1252_high(*next))
        {
            return true;
        }
    }
    false
}

/// Characters that Windows-1252 places in the 0x80..0x9F range.
const fn is_cp1252_high(ch: char) -> bool {
    matches!(
        ch,
        '€' | '‚'
            | 'ƒ'
            | '„'
            | '…'
            | '†'
            | '‡'
            | 'ˆ'
            | '‰'
            | 'Š'
            | '‹'
            | 'Œ'
            | 'Ž'
            | '‘'
            | '’'
            | '“'
            | '”'
            | '•'
            | '–'
            | '—'
            | '˜'
            | '™'
            | 'š'
            | '›'
            | 'œ'
            | 'ž'
            | 'Ÿ'
    )
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../i18n/en.json"),
        LocaleCode::Pt => include_str!("../i18n/pt.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn sample() -> Result<Catalog, CatalogError> {
        Catalog::from_sources(&[
            (LocaleCode::En, r#"{"statusOn": "ON", "statusOff": "OFF"}"#),
            (
                LocaleCode::Pt,
                r#"{"statusOn": "LIGADO", "statusOff": "DESLIGADO"}"#,
            ),
        ])
    }

    #[test]
    fn builtin_catalog_passes_audit() -> Result<(), Box<dyn Error>> {
        let catalog = Catalog::builtin();
        catalog.validate()?;
        assert_eq!(
            catalog.locales().collect::<Vec<_>>(),
            LocaleCode::all().to_vec()
        );
        Ok(())
    }

    #[test]
    fn builtin_catalog_translates_every_key() {
        let catalog = Catalog::builtin();
        for locale in LocaleCode::all() {
            for key in catalog.all_keys() {
                let text = catalog.text(locale, key);
                assert!(!text.is_empty(), "{locale}:{key} is empty");
                assert_ne!(text, key, "{locale}:{key} echoes its key");
            }
        }
    }

    #[test]
    fn builtin_catalog_keeps_accents_and_line_breaks() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.lookup(LocaleCode::Pt, "vacuum1"), Some("Vácuo 1"));
        assert!(
            catalog
                .text(LocaleCode::En, "shutdownConfirm")
                .contains("\n\n")
        );
        assert!(
            catalog
                .text(LocaleCode::En, "calibrationText")
                .contains("\"Calibrate All Channels\"")
        );
    }

    #[test]
    fn text_falls_back_to_key() -> Result<(), Box<dyn Error>> {
        let catalog = sample()?;
        assert_eq!(catalog.text(LocaleCode::Pt, "statusOn"), "LIGADO");
        assert_eq!(catalog.text(LocaleCode::En, "nonexistentKey"), "nonexistentKey");
        assert_eq!(catalog.lookup(LocaleCode::En, "nonexistentKey"), None);
        Ok(())
    }

    #[test]
    fn empty_value_falls_back_to_key() -> Result<(), Box<dyn Error>> {
        let catalog = Catalog::from_sources(&[
            (LocaleCode::En, r#"{"statusOn": "ON"}"#),
            (LocaleCode::Pt, r#"{"statusOn": ""}"#),
        ])?;
        assert_eq!(catalog.text(LocaleCode::Pt, "statusOn"), "statusOn");
        assert_eq!(catalog.lookup(LocaleCode::Pt, "statusOn"), Some(""));
        assert_eq!(catalog.text(LocaleCode::En, "statusOn"), "ON");
        Ok(())
    }

    #[test]
    fn malformed_embedded_source_degrades_to_echoing_keys() {
        let catalog = Catalog::from_embedded(&[
            (LocaleCode::En, r#"{"statusOn": "ON"}"#),
            (LocaleCode::Pt, r#"{"statusOn": "LIGADO""#),
        ]);
        assert_eq!(catalog, Catalog::default());
        assert_eq!(catalog.locales().count(), 0);
        assert_eq!(catalog.text(LocaleCode::En, "statusOn"), "statusOn");
    }

    #[test]
    fn well_formed_embedded_source_is_kept() {
        let catalog = Catalog::from_embedded(&[(LocaleCode::En, r#"{"statusOn": "ON"}"#)]);
        assert_eq!(catalog.text(LocaleCode::En, "statusOn"), "ON");
    }

    #[test]
    fn keys_are_listed_per_locale() -> Result<(), Box<dyn Error>> {
        let catalog = Catalog::from_sources(&[
            (LocaleCode::En, r#"{"statusOn": "ON", "statusOff": "OFF"}"#),
            (LocaleCode::Pt, r#"{"statusOn": "LIGADO"}"#),
        ])?;
        assert_eq!(
            catalog.keys(LocaleCode::En).collect::<Vec<_>>(),
            vec!["statusOff", "statusOn"]
        );
        assert_eq!(catalog.keys(LocaleCode::Pt).collect::<Vec<_>>(), vec!["statusOn"]);
        let empty = Catalog::default();
        assert_eq!(empty.keys(LocaleCode::Pt).count(), 0);
        Ok(())
    }

    #[test]
    fn missing_locale_bundle_echoes_keys() -> Result<(), Box<dyn Error>> {
        let catalog = Catalog::from_sources(&[(LocaleCode::En, r#"{"statusOn": "ON"}"#)])?;
        assert_eq!(catalog.text(LocaleCode::Pt, "statusOn"), "statusOn");
        Ok(())
    }

    #[test]
    fn non_string_values_are_rejected() {
        let result = Catalog::from_sources(&[(LocaleCode::Pt, r#"{"statusOn": 1}"#)]);
        assert!(matches!(
            result,
            Err(CatalogError::Parse {
                locale: LocaleCode::Pt,
                ..
            })
        ));
    }

    #[test]
    fn audit_reports_drift_blanks_and_mojibake() -> Result<(), Box<dyn Error>> {
        let catalog = Catalog::from_sources(&[
            (
                LocaleCode::En,
                r#"{"signalsPage": "Digital Signals", "signalsTitle": "Signals", "reset": "reset"}"#,
            ),
            (
                LocaleCode::Pt,
                r#"{"signalsPage": "  ", "reset": "Resetar", "vacuum1": "VÃ¡cuo 1"}"#,
            ),
        ])?;
        let issues = catalog.audit();
        assert_eq!(
            issues,
            vec![
                CatalogIssue::Untranslated {
                    locale: LocaleCode::En,
                    key: "reset".to_string(),
                },
                CatalogIssue::MissingKey {
                    locale: LocaleCode::En,
                    key: "vacuum1".to_string(),
                },
                CatalogIssue::EmptyValue {
                    locale: LocaleCode::Pt,
                    key: "signalsPage".to_string(),
                },
                CatalogIssue::MissingKey {
                    locale: LocaleCode::Pt,
                    key: "signalsTitle".to_string(),
                },
                CatalogIssue::SuspectEncoding {
                    locale: LocaleCode::Pt,
                    key: "vacuum1".to_string(),
                },
            ]
        );
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::Incomplete { issues }) if issues.len() == 5
        ));
        Ok(())
    }

    #[test]
    fn audit_flags_absent_locale() -> Result<(), Box<dyn Error>> {
        let catalog = Catalog::from_sources(&[(LocaleCode::En, r#"{"title": "AirLab"}"#)])?;
        assert_eq!(
            catalog.audit(),
            vec![CatalogIssue::MissingLocale {
                locale: LocaleCode::Pt
            }]
        );
        Ok(())
    }

    #[test]
    fn encoding_heuristic_spares_real_portuguese() {
        assert!(!looks_mis_encoded("NÃO está em execução"));
        assert!(!looks_mis_encoded("Pressão Instantânea:"));
        assert!(looks_mis_encoded("PressÃ£o"));
        assert!(looks_mis_encoded("Ã°Å¸â€™Â¨"));
        assert!(looks_mis_encoded("Erro de conex\u{FFFD}o"));
    }

    #[test]
    fn issues_serialize_with_kind_tag() -> Result<(), Box<dyn Error>> {
        let issue = CatalogIssue::MissingKey {
            locale: LocaleCode::Pt,
            key: "signalsTitle".to_string(),
        };
        let value = serde_json::to_value(&issue)?;
        assert_eq!(
            value,
            serde_json::json!({"kind": "missing_key", "locale": "pt", "key": "signalsTitle"})
        );
        assert_eq!(issue.describe(), "[pt] missing key `signalsTitle`");
        assert_eq!(issue.locale(), LocaleCode::Pt);
        Ok(())
    }
}
