//! Durable key-value storage used by the session and presentation-mode stores.
//!
//! The browser implementation lives in the frontend crate on top of
//! `gloo-storage`; [`MemoryStore`] backs native tests and browsers where web
//! storage is disabled.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::StorageError;

/// Keys the client persists under.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USER: &str = "user";
    pub const DARK_MODE: &str = "darkMode";
}

/// A JSON-encoded string store, shaped after `window.localStorage`.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> Option<String>;

    fn set_raw(&self, key: &str, value: String) -> Result<(), StorageError>;

    fn delete(&self, key: &str);

    /// Reads and decodes a value. Missing and undecodable entries both read as `None`.
    fn get<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
        Self: Sized,
    {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, %err, "Ignoring undecodable stored value");
                None
            }
        }
    }

    fn set<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
        Self: Sized,
    {
        let encoded = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.set_raw(key, encoded)
    }
}

/// In-memory store. Clones share contents, which lets tests simulate a reload
/// by building fresh stores over the same handle.
#[derive(Clone, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.0.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}
