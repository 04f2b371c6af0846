//! Durable state storage port and helpers.
//!
//! The original demo kept everything in browser local storage under fixed
//! string keys. This module keeps that shape - a string-keyed store with
//! three well-known keys - but behind an injected [`StateStore`] trait so
//! the cart engine and catalog never touch a concrete backend.
//!
//! Persistence is fire-and-forget from the domain's point of view:
//! [`persist_json`] and [`discard`] log failures and return, and
//! [`load_json`] treats malformed data as absent. No storage failure ever
//! blocks or corrupts in-memory state.

pub mod file;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Well-known storage keys, shared by every collaborator.
pub mod keys {
    /// The shopper's cart.
    pub const CART: &str = "royal_cart";
    /// The admin-edited product list overriding the seed catalog.
    pub const PRODUCTS: &str = "royal_products";
    /// The signed-in customer identity.
    pub const USER: &str = "royal_user";
}

/// Errors a storage backend can report.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not read or write.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A value could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String-keyed durable storage.
///
/// Implementations must treat an absent key as `Ok(None)`, not an error.
pub trait StateStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Outcome of reading a key during hydration.
#[derive(Debug)]
pub enum Hydration<T> {
    /// The key held parseable data.
    Value(T),
    /// The key holds nothing usable (absent or malformed); safe to
    /// overwrite with a fresh default.
    Empty,
    /// The backend could not be read. The key may still hold good data,
    /// so callers must not overwrite it.
    Unavailable,
}

/// Hydrate a value from storage, reporting why it is missing.
///
/// Failures are logged, never raised. Most callers only need
/// [`load_json`]; use this form when the fallback path writes back to
/// the same key.
pub fn hydrate_json<T: DeserializeOwned>(store: &dyn StateStore, key: &str) -> Hydration<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Hydration::Empty,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted state");
            return Hydration::Unavailable;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Hydration::Value(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "malformed persisted state, starting fresh");
            Hydration::Empty
        }
    }
}

/// Hydrate a value from storage.
///
/// Absent, unreadable, and malformed data all yield `None`; the caller
/// falls back to its empty/default value. Failures are logged, never
/// raised.
pub fn load_json<T: DeserializeOwned>(store: &dyn StateStore, key: &str) -> Option<T> {
    match hydrate_json(store, key) {
        Hydration::Value(value) => Some(value),
        Hydration::Empty | Hydration::Unavailable => None,
    }
}

/// Persist a value, fire-and-forget.
///
/// Serialization or backend failures are logged and swallowed; the
/// in-memory state the caller just mutated stays authoritative.
pub fn persist_json<T: Serialize>(store: &dyn StateStore, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to serialize state");
            return;
        }
    };
    if let Err(e) = store.put(key, &raw) {
        tracing::warn!(key, error = %e, "failed to persist state");
    }
}

/// Delete a key, fire-and-forget.
pub fn discard(store: &dyn StateStore, key: &str) {
    if let Err(e) = store.remove(key) {
        tracing::warn!(key, error = %e, "failed to discard persisted state");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl StateStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io(std::io::Error::other("unreadable")))
        }

        fn put(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("unwritable")))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("unwritable")))
        }
    }

    #[test]
    fn test_load_json_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(load_json::<u32>(&store, keys::CART), None);
    }

    #[test]
    fn test_hydrate_json_separates_unreadable_from_empty() {
        let store = MemoryStore::new();
        assert!(matches!(
            hydrate_json::<u32>(&store, keys::CART),
            Hydration::Empty
        ));
        store.put(keys::CART, "{bad").unwrap();
        assert!(matches!(
            hydrate_json::<u32>(&store, keys::CART),
            Hydration::Empty
        ));
        assert!(matches!(
            hydrate_json::<u32>(&BrokenStore, keys::CART),
            Hydration::Unavailable
        ));
    }

    #[test]
    fn test_load_json_malformed_value() {
        let store = MemoryStore::new();
        store.put(keys::CART, "{not json").unwrap();
        assert_eq!(load_json::<u32>(&store, keys::CART), None);
    }

    #[test]
    fn test_persist_then_load_round_trip() {
        let store = MemoryStore::new();
        persist_json(&store, keys::USER, &vec![1u32, 2, 3]);
        assert_eq!(
            load_json::<Vec<u32>>(&store, keys::USER),
            Some(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_discard_removes_value() {
        let store = MemoryStore::new();
        persist_json(&store, keys::USER, &7u32);
        discard(&store, keys::USER);
        assert_eq!(load_json::<u32>(&store, keys::USER), None);
        // Discarding an absent key is silently fine.
        discard(&store, keys::USER);
    }
}
