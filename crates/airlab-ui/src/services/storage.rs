//! `localStorage`-backed locale persistence.
//!
//! Values are stored as bare strings (`pt`, not `"pt"`) so other scripts on the
//! same origin can read them without JSON decoding.

use airlab_i18n::{LocaleStore, StoreError};
use gloo::console;
use gloo::utils::window;
use web_sys::Storage;

/// Locale store over the window's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStore;

impl LocaleStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        let storage = local_storage().ok()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                console::error!("localStorage read failed", key, err);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = local_storage()?;
        storage.set_item(key, value).map_err(|err| {
            let detail = format!("{err:?}");
            console::error!("localStorage write failed", key, detail.clone());
            StoreError::WriteRejected {
                key: key.to_string(),
                detail,
            }
        })
    }
}

fn local_storage() -> Result<Storage, StoreError> {
    match window().local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StoreError::Unavailable {
            detail: "localStorage is disabled".to_string(),
        }),
        Err(err) => Err(StoreError::Unavailable {
            detail: format!("{err:?}"),
        }),
    }
}
