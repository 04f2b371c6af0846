//! Storefront session: the composition root.
//!
//! One session owns everything a shopping visit needs: the catalog, the
//! cart engine, the signed-in identity, and a shared storage handle. The
//! CLI opens a session per invocation; tests build one over an in-memory
//! store with a scripted fault policy.

use std::sync::Arc;

use chrono::Utc;
use royal_core::{
    Cart, Customer, Email, EmailError, Order, OrderId, OrderStatus, Price, Product, ProductId,
};
use uuid::Uuid;

use crate::cart::{AddError, CartEngine};
use crate::catalog::CatalogStore;
use crate::config::ShopConfig;
use crate::fault::{FaultPolicy, RandomFaults};
use crate::recommend;
use crate::seed::seed_products;
use crate::storage::{self, JsonFileStore, StateStore, keys};

/// A live shopping session over a storage backend.
pub struct StorefrontSession {
    store: Arc<dyn StateStore>,
    catalog: CatalogStore,
    engine: CartEngine,
    customer: Option<Customer>,
    recommend_limit: usize,
}

impl StorefrontSession {
    /// Open a session against the configured data directory, with the
    /// configured random add-failure rate.
    #[must_use]
    pub fn open(config: &ShopConfig) -> Self {
        let store = Arc::new(JsonFileStore::new(config.data_dir.clone()));
        Self::with_store(
            store,
            Box::new(RandomFaults::new(config.add_failure_rate)),
            config.recommend_limit,
        )
    }

    /// Assemble a session from explicit ports. Hydrates the catalog (seed
    /// fallback), the cart, and the signed-in identity from `store`.
    #[must_use]
    pub fn with_store(
        store: Arc<dyn StateStore>,
        faults: Box<dyn FaultPolicy>,
        recommend_limit: usize,
    ) -> Self {
        let catalog = CatalogStore::load(Arc::clone(&store), seed_products());
        let engine = CartEngine::load(Arc::clone(&store), faults);
        let customer = storage::load_json(store.as_ref(), keys::USER);
        Self {
            store,
            catalog,
            engine,
            customer,
            recommend_limit,
        }
    }

    /// Add one unit of the identified product to the cart.
    ///
    /// An id that is not in the catalog is ignored (the product was removed
    /// while on screen), matching the quiet tolerance of the cart itself.
    ///
    /// # Errors
    ///
    /// Returns [`AddError::Transient`] when the fault policy rejects the
    /// attempt; the cart is unchanged.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<(), AddError> {
        let Some(product) = self.catalog.find_by_id(id) else {
            tracing::debug!(product = %id, "add for unknown product ignored");
            return Ok(());
        };
        let product = product.clone();
        self.engine.add_item(&product)
    }

    /// Apply a signed quantity delta to a cart line, floored at 1.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i32) {
        self.engine.update_quantity(id, delta);
    }

    /// Remove a whole cart line.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.engine.remove_item(id);
    }

    /// Current cart total.
    #[must_use]
    pub fn total(&self) -> Price {
        self.engine.total()
    }

    /// Current cart quantity sum.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.engine.count()
    }

    /// The cart itself, for rendering.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        self.engine.cart()
    }

    /// Read access to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Write access to the catalog, for the admin surface.
    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    /// "People also liked" suggestions for the current cart, up to the
    /// session's configured limit.
    #[must_use]
    pub fn recommendations(&self) -> Vec<&Product> {
        recommend::also_liked(self.engine.cart(), &self.catalog, self.recommend_limit)
    }

    /// Mock login: derives a `name@royal.com` address from the display
    /// name and persists the identity.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError`] when the derived address is structurally
    /// invalid (an empty or `@`-containing name).
    pub fn login(&mut self, name: &str) -> Result<&Customer, EmailError> {
        let email = Email::parse(&format!("{}@royal.com", name.to_lowercase()))?;
        let customer = Customer {
            name: name.to_owned(),
            email,
            is_admin: false,
        };
        storage::persist_json(self.store.as_ref(), keys::USER, &customer);
        tracing::info!(customer = %customer.name, "signed in");
        Ok(self.customer.insert(customer))
    }

    /// Sign out and discard the persisted identity.
    pub fn logout(&mut self) {
        if self.customer.take().is_some() {
            storage::discard(self.store.as_ref(), keys::USER);
            tracing::info!("signed out");
        }
    }

    /// The signed-in customer, if any.
    #[must_use]
    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// Complete checkout: capture a receipt for the current cart and empty
    /// it. An empty cart has nothing to check out and yields `None`.
    pub fn checkout_complete(&mut self) -> Option<Order> {
        if self.engine.cart().is_empty() {
            return None;
        }
        let customer_name = self
            .customer
            .as_ref()
            .map_or_else(|| "Guest".to_owned(), |c| c.name.clone());
        let order = Order {
            id: OrderId::new(format!("ORD-{}", Uuid::new_v4())),
            customer_name,
            date: Utc::now().date_naive(),
            total: self.engine.total(),
            status: OrderStatus::Pending,
            items: self.engine.cart().lines().to_vec(),
        };
        self.engine.clear();
        tracing::info!(order = %order.id, total = %order.total, "checkout complete");
        Some(order)
    }
}
