//! Durable storage seam for the active locale.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StoreError;

/// Default storage key holding the persisted locale code.
pub const STORAGE_KEY: &str = "airlab_language";

/// Client-side key-value storage that survives a reload.
///
/// Writes are synchronous; callers treat failures as non-fatal.
pub trait LocaleStore {
    /// Read the raw value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the host refuses the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store. Clones share the same map, so a fresh localizer built on
/// a clone observes what an earlier one wrote, the same way a page reload does.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl LocaleStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
