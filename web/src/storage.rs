use gloo::storage::{LocalStorage, Storage as _};
use trivia_core::{Storage, StorageError};
use wasm_bindgen::JsValue;

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Browser `localStorage`, holding values as raw text.
#[derive(Copy, Clone, Debug, Default)]
pub struct LocalStorageBackend;

impl Storage for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(describe(err)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw().set_item(key, value).map_err(|err| {
            let reason = describe(err);
            log::error!("Could not write {} to local storage: {}", key, reason);
            StorageError::WriteRejected(reason)
        })
    }
}
