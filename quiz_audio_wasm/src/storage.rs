use quiz_audio_core::{MemoryStore, SessionStore, StorageError};
use web_sys::Storage;

use crate::utils::{describe_js_error, js_window};

/// The tab's `sessionStorage`, or a page-local map when the browser denies it
pub enum PageStore {
    Session(Storage),
    Memory(MemoryStore),
}

impl PageStore {
    pub fn open() -> Self {
        match js_window().session_storage() {
            Ok(Some(storage)) => PageStore::Session(storage),
            Ok(None) => {
                tracing::warn!("no session storage, music state will not survive navigation");
                PageStore::Memory(MemoryStore::new())
            }
            Err(err) => {
                tracing::warn!("session storage denied: {}", describe_js_error(&err));
                PageStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl SessionStore for PageStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self {
            PageStore::Session(storage) => storage.get_item(key).ok().flatten(),
            PageStore::Memory(store) => store.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            PageStore::Session(storage) => storage
                .set_item(key, value)
                .map_err(|err| StorageError::Unavailable(describe_js_error(&err))),
            PageStore::Memory(store) => store.set_item(key, value),
        }
    }
}
