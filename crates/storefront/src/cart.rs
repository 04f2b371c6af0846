//! Cart engine: owned cart state plus its ports.
//!
//! The engine wraps the pure [`Cart`] transformations from `royal-core`
//! with the two injected ports the demo needs: durable storage (persisted
//! fire-and-forget after every mutation) and the add-failure decision.
//! Every operation runs to completion synchronously; derived reads never
//! block on persistence.

use std::sync::Arc;

use royal_core::{Cart, Price, Product, ProductId};

use crate::fault::FaultPolicy;
use crate::storage::{self, StateStore, keys};

/// Failure signal from [`CartEngine::add_item`].
///
/// Distinguishable from success so the caller can present a different
/// acknowledgment; the cart is guaranteed unchanged. A later add is a
/// fresh attempt - the engine never retries on its own.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    /// A transient fault rejected the add before anything was applied.
    #[error("unable to add {name} to cart, please try again")]
    Transient { name: String },
}

/// The cart and its collaborators.
///
/// Each presentation entry point constructs (or is handed) its own engine
/// rather than reaching into ambient shared state.
pub struct CartEngine {
    cart: Cart,
    store: Arc<dyn StateStore>,
    faults: Box<dyn FaultPolicy>,
}

impl CartEngine {
    /// Build an engine, hydrating the cart from storage.
    ///
    /// Absent or malformed persisted state (including structural
    /// violations like duplicate lines or zero quantities) yields an empty
    /// cart, never an error.
    #[must_use]
    pub fn load(store: Arc<dyn StateStore>, faults: Box<dyn FaultPolicy>) -> Self {
        let cart = match storage::load_json::<Cart>(store.as_ref(), keys::CART) {
            Some(cart) if cart.is_well_formed() => cart,
            Some(_) => {
                tracing::warn!("persisted cart violates invariants, starting empty");
                Cart::new()
            }
            None => Cart::new(),
        };
        Self { cart, store, faults }
    }

    /// Add one unit of `product` to the cart.
    ///
    /// On success the product's line is incremented in place or appended
    /// at quantity 1, and the cart is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AddError::Transient`] when the fault policy rejects the
    /// attempt; the cart is left completely untouched.
    pub fn add_item(&mut self, product: &Product) -> Result<(), AddError> {
        if self.faults.fail_next_add() {
            tracing::warn!(product = %product.id, "add-to-cart rejected by transient fault");
            return Err(AddError::Transient {
                name: product.name.clone(),
            });
        }
        self.cart.add(product);
        tracing::debug!(product = %product.id, count = self.cart.count(), "added to cart");
        self.persist();
        Ok(())
    }

    /// Apply a signed quantity delta to the line for `id`, clamped at a
    /// floor of 1. Unknown ids are a silent no-op; this is never a removal
    /// mechanism.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i32) {
        if self.cart.adjust_quantity(id, delta) {
            self.persist();
        } else {
            tracing::debug!(product = %id, "quantity update for absent line ignored");
        }
    }

    /// Remove the whole line for `id`; no-op when absent.
    pub fn remove_item(&mut self, id: &ProductId) {
        if self.cart.remove(id) {
            self.persist();
        } else {
            tracing::debug!(product = %id, "removal of absent line ignored");
        }
    }

    /// Empty the cart in one step (checkout completion).
    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Current cart total, recomputed from the lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Current quantity sum across lines (badge count).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.cart.count()
    }

    /// Read access to the cart for rendering and derivations.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    fn persist(&self) {
        storage::persist_json(self.store.as_ref(), keys::CART, &self.cart);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use royal_core::Category;

    use super::*;
    use crate::fault::{NoFaults, ScriptedFaults};
    use crate::storage::MemoryStore;

    fn product(id: &str, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_whole(price),
            category: Category::Sneakers,
            image: String::new(),
            featured: false,
        }
    }

    fn engine() -> CartEngine {
        CartEngine::load(Arc::new(MemoryStore::new()), Box::new(NoFaults))
    }

    #[test]
    fn test_add_item_success() {
        let mut engine = engine();
        engine.add_item(&product("a", 100)).unwrap();
        engine.add_item(&product("a", 100)).unwrap();
        assert_eq!(engine.cart().len(), 1);
        assert_eq!(engine.count(), 2);
        assert_eq!(engine.total(), Price::from_whole(200));
    }

    #[test]
    fn test_failed_add_leaves_cart_unchanged() {
        let store = Arc::new(MemoryStore::new());
        let mut engine = CartEngine::load(
            store,
            Box::new(ScriptedFaults::new([false, true])),
        );
        engine.add_item(&product("a", 100)).unwrap();
        let before = engine.cart().clone();
        let err = engine.add_item(&product("b", 50)).unwrap_err();
        assert!(matches!(err, AddError::Transient { .. }));
        assert_eq!(engine.cart(), &before);
        // The next attempt is fresh and succeeds.
        engine.add_item(&product("b", 50)).unwrap();
        assert_eq!(engine.cart().len(), 2);
    }

    #[test]
    fn test_mutations_persist_to_store() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let mut engine = CartEngine::load(Arc::clone(&store), Box::new(NoFaults));
        engine.add_item(&product("a", 100)).unwrap();
        engine.update_quantity(&ProductId::new("a"), 2);

        let rehydrated = CartEngine::load(store, Box::new(NoFaults));
        assert_eq!(rehydrated.count(), 3);
        assert_eq!(rehydrated.total(), Price::from_whole(300));
    }

    #[test]
    fn test_load_recovers_from_malformed_state() {
        let store = Arc::new(MemoryStore::new());
        store.put(keys::CART, "not even json").unwrap();
        let engine = CartEngine::load(store, Box::new(NoFaults));
        assert!(engine.cart().is_empty());
    }

    #[test]
    fn test_load_rejects_structurally_invalid_cart() {
        let store = Arc::new(MemoryStore::new());
        let zero_quantity = r#"{"lines":[{"product":{"id":"a","name":"A","price":"10",
            "category":"Apparel","image":""},"quantity":0}]}"#;
        store.put(keys::CART, zero_quantity).unwrap();
        let engine = CartEngine::load(store, Box::new(NoFaults));
        assert!(engine.cart().is_empty());
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let store: Arc<dyn StateStore> = Arc::new(MemoryStore::new());
        let mut engine = CartEngine::load(Arc::clone(&store), Box::new(NoFaults));
        engine.add_item(&product("a", 100)).unwrap();
        engine.clear();
        assert!(engine.cart().is_empty());

        let rehydrated = CartEngine::load(store, Box::new(NoFaults));
        assert!(rehydrated.cart().is_empty());
    }
}
