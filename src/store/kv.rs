//! Key-value store contract and the persisted key layout.
//!
//! Collections are stored whole: one JSON array (or object) per key.
//! Per-user collections are namespaced by owner id so one user's rows are
//! never readable through another user's repository.

use serde::{de::DeserializeOwned, Serialize};

use crate::types::errors::StoreError;

/// Key holding the credential store (all users).
pub const USERS_KEY: &str = "users";

/// Key holding the persisted session marker, absent when signed out.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Storage key for a user's bookmark collection.
pub fn bookmarks_key(owner_id: &str) -> String {
    format!("bookmarks:{}", owner_id)
}

/// Storage key for a user's category collection.
pub fn categories_key(owner_id: &str) -> String {
    format!("categories:{}", owner_id)
}

/// A persistent string-keyed store. Operations are synchronous; a write
/// either fully replaces the payload under a key or fails. There is no
/// atomicity across two different keys.
pub trait KeyValueStore {
    /// Returns the raw payload under `key`, or `None` if the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the payload under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Absent keys are not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Reads a whole collection from `key`.
///
/// A missing key reads as the empty collection. So does an unreadable
/// payload: parsing is best-effort and no repair is attempted.
pub fn read_collection<T, S>(store: &S, key: &str) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.read(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
        None => Ok(Vec::new()),
    }
}

/// Serializes and writes a whole collection under `key`.
pub fn write_collection<T, S>(store: &S, key: &str, items: &[T]) -> Result<(), StoreError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(items).map_err(|e| {
        StoreError::Unavailable(format!("Failed to serialize '{}': {}", key, e))
    })?;
    store.write(key, &raw)
}

/// Reads a single JSON object from `key`. Missing or unreadable payloads
/// read as `None`.
pub fn read_object<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.read(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw).ok()),
        None => Ok(None),
    }
}

/// Serializes and writes a single JSON object under `key`.
pub fn write_object<T, S>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| {
        StoreError::Unavailable(format!("Failed to serialize '{}': {}", key, e))
    })?;
    store.write(key, &raw)
}
