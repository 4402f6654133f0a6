//! Active-locale state, persistence, and the switch/page-ready lifecycle.
//!
//! # Design
//! - One owned [`Localizer`] per page; no ambient globals, so tests can run
//!   several side by side.
//! - Reads go through [`Translator`] handles that share the active-locale cell,
//!   letting render code translate without holding a borrow of the localizer.
//! - Storage failures never undo an in-memory switch; they are logged and
//!   reported through [`Persisted`].
//! - Everything runs synchronously on the caller's thread, hook included.

use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::config::LocalizerConfig;
use crate::error::LocaleError;
use crate::locale::LocaleCode;
use crate::selector::{LocaleSelector, sync_selectors};
use crate::store::LocaleStore;

type RenderHook = Box<dyn FnMut()>;

/// Outcome of writing the active locale back to storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persisted {
    /// The store accepted the write.
    Stored,
    /// The store refused the write; the in-memory locale still changed.
    Failed,
}

/// Cheap read handle for translating under the current active locale.
#[derive(Clone, Debug)]
pub struct Translator {
    catalog: Arc<Catalog>,
    active: Rc<Cell<LocaleCode>>,
}

impl Translator {
    /// Locale lookups currently resolve against.
    #[must_use]
    pub fn active_locale(&self) -> LocaleCode {
        self.active.get()
    }

    /// Text for `key` in the active locale, or `key` itself when absent.
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.text(self.active.get(), key)
    }
}

/// Owner of the active locale and everything that reacts to it.
pub struct Localizer {
    config: LocalizerConfig,
    translator: Translator,
    store: Box<dyn LocaleStore>,
    selectors: Vec<Box<dyn LocaleSelector>>,
    render_hook: Option<RenderHook>,
}

impl Debug for Localizer {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Localizer")
            .field("config", &self.config)
            .field("active", &self.active_locale())
            .field("selectors", &self.selectors.len())
            .field("render_hook", &self.render_hook.is_some())
            .finish_non_exhaustive()
    }
}

impl Localizer {
    /// Build a localizer and restore the persisted locale from `store`.
    ///
    /// Missing or unrecognised stored values fall back to
    /// [`LocalizerConfig::default_locale`].
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        config: LocalizerConfig,
        store: impl LocaleStore + 'static,
    ) -> Self {
        let active = restore_locale(&store, &config);
        Self {
            config,
            translator: Translator {
                catalog,
                active: Rc::new(Cell::new(active)),
            },
            store: Box::new(store),
            selectors: Vec::new(),
            render_hook: None,
        }
    }

    /// Localizer over the embedded catalog with default configuration.
    #[must_use]
    pub fn with_builtin(store: impl LocaleStore + 'static) -> Self {
        Self::new(Catalog::builtin(), LocalizerConfig::default(), store)
    }

    /// Currently selected locale.
    #[must_use]
    pub fn active_locale(&self) -> LocaleCode {
        self.translator.active_locale()
    }

    /// Text for `key` in the active locale, or `key` itself when absent.
    #[must_use]
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.translator.translate(key)
    }

    /// Read handle sharing this localizer's active locale.
    #[must_use]
    pub fn translator(&self) -> Translator {
        self.translator.clone()
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &LocalizerConfig {
        &self.config
    }

    /// Change the active locale and persist it, best effort.
    pub fn set_active_locale(&mut self, locale: LocaleCode) -> Persisted {
        self.translator.active.set(locale);
        match self.store.write(&self.config.storage_key, locale.code()) {
            Ok(()) => Persisted::Stored,
            Err(err) => {
                warn!(
                    error = %err,
                    key = %self.config.storage_key,
                    locale = %locale,
                    "failed to persist active locale; keeping in-memory selection"
                );
                Persisted::Failed
            }
        }
    }

    /// Switch locale: update state and storage, restyle selectors, then re-render.
    pub fn switch_locale(&mut self, locale: LocaleCode) -> Persisted {
        let persisted = self.set_active_locale(locale);
        debug!(locale = %locale, ?persisted, "switched active locale");
        self.refresh_selectors();
        self.fire_render_hook();
        persisted
    }

    /// Switch using a raw tag such as a `data-lang` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Unsupported`] and leaves all state untouched when
    /// the tag names no supported locale.
    pub fn switch_locale_tag(&mut self, tag: &str) -> Result<LocaleCode, LocaleError> {
        let locale = tag.parse::<LocaleCode>()?;
        self.switch_locale(locale);
        Ok(locale)
    }

    /// Page-load synchronisation: restyle selectors to the restored locale and re-render.
    pub fn page_ready(&mut self) {
        debug!(locale = %self.active_locale(), "page ready");
        self.refresh_selectors();
        self.fire_render_hook();
    }

    /// Register the page's re-render routine, replacing any previous one.
    pub fn register_render_hook(&mut self, hook: impl FnMut() + 'static) {
        self.render_hook = Some(Box::new(hook));
    }

    /// Drop the registered re-render routine.
    pub fn clear_render_hook(&mut self) {
        self.render_hook = None;
    }

    /// Whether a re-render routine is registered.
    #[must_use]
    pub const fn has_render_hook(&self) -> bool {
        self.render_hook.is_some()
    }

    /// Attach a language selector so switches keep its active state current.
    pub fn attach_selector(&mut self, selector: impl LocaleSelector + 'static) {
        self.selectors.push(Box::new(selector));
    }

    /// Attached selectors, in attachment order.
    #[must_use]
    pub fn selectors(&self) -> &[Box<dyn LocaleSelector>] {
        &self.selectors
    }

    fn refresh_selectors(&mut self) {
        let active = self.active_locale();
        sync_selectors(self.selectors.iter_mut(), active);
    }

    fn fire_render_hook(&mut self) {
        if let Some(hook) = self.render_hook.as_mut() {
            hook();
        }
    }
}

fn restore_locale(store: &dyn LocaleStore, config: &LocalizerConfig) -> LocaleCode {
    let Some(stored) = store.read(&config.storage_key) else {
        debug!(
            locale = %config.default_locale,
            "no persisted locale; using default"
        );
        return config.default_locale;
    };
    if let Some(locale) = LocaleCode::from_lang_tag(&stored) {
        debug!(locale = %locale, "restored persisted locale");
        return locale;
    }
    warn!(
        stored = %stored,
        fallback = %config.default_locale,
        "ignoring unrecognised persisted locale"
    );
    config.default_locale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::selector::SelectorButton;
    use crate::store::{MemoryStore, STORAGE_KEY};

    struct ReadOnlyStore;

    impl LocaleStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Option<String> {
            Some("pt".to_string())
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::WriteRejected {
                key: key.to_string(),
                detail: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn restores_default_when_nothing_persisted() {
        let localizer = Localizer::with_builtin(MemoryStore::new());
        assert_eq!(localizer.active_locale(), LocaleCode::En);
    }

    #[test]
    fn restores_configured_default() {
        let config = LocalizerConfig {
            default_locale: LocaleCode::Pt,
            ..LocalizerConfig::default()
        };
        let localizer = Localizer::new(Catalog::builtin(), config, MemoryStore::new());
        assert_eq!(localizer.active_locale(), LocaleCode::Pt);
    }

    #[test]
    fn unrecognised_persisted_value_falls_back() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "klingon");
        let localizer = Localizer::with_builtin(store);
        assert_eq!(localizer.active_locale(), LocaleCode::En);
    }

    #[test]
    fn region_tags_are_normalised_on_restore() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "pt-BR");
        let localizer = Localizer::with_builtin(store);
        assert_eq!(localizer.active_locale(), LocaleCode::Pt);
    }

    #[test]
    fn custom_storage_key_is_honoured() {
        let store = MemoryStore::with_entry("bench.lang", "pt");
        let config = LocalizerConfig {
            storage_key: "bench.lang".to_string(),
            ..LocalizerConfig::default()
        };
        let mut localizer = Localizer::new(Catalog::builtin(), config, store.clone());
        assert_eq!(localizer.config().storage_key, "bench.lang");
        assert_eq!(localizer.config().default_locale, LocaleCode::En);
        assert_eq!(localizer.active_locale(), LocaleCode::Pt);
        assert_eq!(localizer.set_active_locale(LocaleCode::En), Persisted::Stored);
        assert_eq!(store.read("bench.lang").as_deref(), Some("en"));
        assert_eq!(store.read(STORAGE_KEY), None);
    }

    #[test]
    fn storage_failure_keeps_in_memory_switch() {
        let mut localizer = Localizer::with_builtin(ReadOnlyStore);
        assert_eq!(localizer.active_locale(), LocaleCode::Pt);
        assert_eq!(localizer.switch_locale(LocaleCode::En), Persisted::Failed);
        assert_eq!(localizer.active_locale(), LocaleCode::En);
        assert_eq!(localizer.translate("statusOn"), "ON");
    }

    #[test]
    fn translators_follow_switches() {
        let mut localizer = Localizer::with_builtin(MemoryStore::new());
        let translator = localizer.translator();
        assert_eq!(translator.translate("statusError"), "ERROR");
        localizer.switch_locale(LocaleCode::Pt);
        assert_eq!(translator.active_locale(), LocaleCode::Pt);
        assert_eq!(translator.translate("statusError"), "ERRO");
    }

    #[test]
    fn hook_can_be_replaced_and_cleared() {
        let calls = Rc::new(Cell::new(0_u32));
        let mut localizer = Localizer::with_builtin(MemoryStore::new());
        assert!(!localizer.has_render_hook());

        localizer.register_render_hook(|| {});
        let counter = Rc::clone(&calls);
        localizer.register_render_hook(move || counter.set(counter.get() + 1));
        localizer.page_ready();
        assert_eq!(calls.get(), 1);

        localizer.clear_render_hook();
        localizer.switch_locale(LocaleCode::Pt);
        assert_eq!(calls.get(), 1);
        assert!(!localizer.has_render_hook());
    }

    #[test]
    fn page_ready_marks_restored_locale_without_writing() {
        let store = MemoryStore::new();
        let mut localizer = Localizer::with_builtin(store.clone());
        localizer.attach_selector(SelectorButton::for_locale(LocaleCode::En));
        localizer.attach_selector(SelectorButton::for_locale(LocaleCode::Pt));
        localizer.page_ready();
        let active: Vec<&str> = localizer
            .selectors()
            .iter()
            .filter(|selector| selector.is_active())
            .map(|selector| selector.locale_tag())
            .collect();
        assert_eq!(active, vec!["en"]);
        assert!(store.is_empty());
    }

    #[test]
    fn debug_output_summarises_state() {
        let localizer = Localizer::with_builtin(MemoryStore::new());
        let rendered = format!("{localizer:?}");
        assert!(rendered.contains("active: En"));
        assert!(rendered.contains("render_hook: false"));
    }
}
