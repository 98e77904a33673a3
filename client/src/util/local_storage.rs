//! `localStorage` backend for the watchlist store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser access is hydrate-only. Under SSR and native tests the store
//! reads as empty and swallows writes, which keeps server rendering
//! deterministic; the real list is loaded after hydration.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use movies::{KeyValueStore, StorageError};

/// Handle to `window.localStorage`. Holds no browser objects itself, so it
/// is `Send + Sync` and can live inside a signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Write(format!("{err:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_owned()))
}
