//! Integration tests for the Royal storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p royal-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_engine` - Cart mutations and derived values through the engine
//! - `persistence` - Hydration, fire-and-forget writes, failure tolerance
//! - `recommendations` - "People also liked" derivation over real sessions
//! - `catalog_admin` - Wholesale replacement and per-record admin edits
//! - `storefront_session` - Whole-visit flows: browse, shop, login, checkout
//!
//! Everything runs in-process over in-memory storage; no external services
//! are involved. This crate's library holds the shared fixtures.

use std::sync::Arc;

use royal_core::{Category, Price, Product, ProductId};
use royal_storefront::fault::{FaultPolicy, NoFaults};
use royal_storefront::session::StorefrontSession;
use royal_storefront::storage::{MemoryStore, StateStore, StorageError};

/// Build a test product with sensible defaults.
#[must_use]
pub fn product(id: &str, name: &str, price: u64, category: Category) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_whole(price),
        category,
        image: format!("/img/{id}.jpg"),
        featured: false,
    }
}

/// The three-product catalog most scenario tests share.
///
/// A and B are Sneakers at $100 and $50; C is Apparel at $30.
#[must_use]
pub fn abc_catalog() -> Vec<Product> {
    vec![
        product("a", "Product A", 100, Category::Sneakers),
        product("b", "Product B", 50, Category::Sneakers),
        product("c", "Product C", 30, Category::Apparel),
    ]
}

/// Open a session over a fresh in-memory store with no injected faults.
#[must_use]
pub fn memory_session() -> StorefrontSession {
    StorefrontSession::with_store(Arc::new(MemoryStore::new()), Box::new(NoFaults), 4)
}

/// Open a session over the given backend, keeping the handle for
/// rehydration assertions.
#[must_use]
pub fn session_over(
    store: Arc<MemoryStore>,
    faults: Box<dyn FaultPolicy>,
) -> StorefrontSession {
    StorefrontSession::with_store(store, faults, 4)
}

/// A backend whose every operation fails, for fire-and-forget coverage.
#[derive(Debug, Default)]
pub struct FailingStore;

impl FailingStore {
    fn err() -> StorageError {
        StorageError::Io(std::io::Error::other("backend unavailable"))
    }
}

impl StateStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(Self::err())
    }

    fn put(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(Self::err())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(Self::err())
    }
}
