//! Browser `localStorage` behind [`KeyValueStore`].

use dojo::errors::StorageError;
use dojo::storage::KeyValueStore;
use gloo_storage::{LocalStorage, Storage};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, &value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }
}
