//! Supported display languages.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English.
    En,
    /// Portuguese.
    Pt,
}

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Pt]
    }

    /// Two-letter code used in storage, catalog file names, and `data-lang` tags.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    /// Native language name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Pt => "Português",
        }
    }

    /// Compact label for the header language buttons.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Pt => "PT",
        }
    }

    /// Map an arbitrary language tag (`pt`, `PT-br`, `en_US`) to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Locale used when nothing has been persisted yet.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

impl Default for LocaleCode {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl Display for LocaleCode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

impl FromStr for LocaleCode {
    type Err = LocaleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_lang_tag(value).ok_or_else(|| LocaleError::Unsupported {
            tag: value.to_string(),
        })
    }
}
