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
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! AirLab localization core.
//!
//! Holds the per-locale message catalog, the persisted active locale, and the
//! switch/page-ready lifecycle that keeps language buttons and page text in
//! step. Browser bindings live in `airlab-ui`; everything here is plain Rust
//! and runs under native tests.

pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
pub mod localizer;
pub mod selector;
pub mod store;

pub use catalog::{Catalog, CatalogIssue};
pub use config::LocalizerConfig;
pub use error::{CatalogError, ConfigError, LocaleError, StoreError};
pub use locale::{DEFAULT_LOCALE, LocaleCode};
pub use localizer::{Localizer, Persisted, Translator};
pub use selector::{LocaleSelector, SelectorButton, sync_selectors};
pub use store::{LocaleStore, MemoryStore, STORAGE_KEY};
