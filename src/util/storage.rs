//! Browser `localStorage` as a [`PreferenceStore`].
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: private browsing modes and blocked storage make
//! reads return `None` and writes no-ops, so the theme still toggles for the
//! current page view.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use effects::theme::PreferenceStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("localStorage write failed for {key}: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}
