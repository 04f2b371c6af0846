//! Catalog store: the lookup surface over the active product list.
//!
//! The catalog answers "what products exist" and "what products share a
//! category". The list itself is swappable as a whole - an admin edit
//! replaces it wholesale and is validated here at the boundary, never
//! diffed field-by-field. Lookups always read the current list; there is
//! no caching layer to go stale.

use std::sync::Arc;

use royal_core::{Category, Product, ProductError, ProductId};

use crate::storage::{self, Hydration, StateStore, keys};

/// Errors rejecting a catalog replacement.
///
/// A rejected replacement leaves the previous list fully intact; the
/// boundary never applies a partial update.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A record failed field validation.
    #[error(transparent)]
    Product(#[from] ProductError),
    /// Two records share an identifier.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// The active product list plus its persistence handle.
pub struct CatalogStore {
    products: Vec<Product>,
    store: Arc<dyn StateStore>,
}

impl CatalogStore {
    /// Build a catalog from persisted state, falling back to `seed`.
    ///
    /// A persisted override wins when present and valid; malformed or
    /// invalid data is logged and discarded in favor of the seed, which is
    /// then persisted so the admin panel and storefront agree on the
    /// active list. When the backend cannot be read at all the seed is
    /// used in memory only: the key may still hold a good catalog, and a
    /// transient read failure must not replace it.
    #[must_use]
    pub fn load(store: Arc<dyn StateStore>, seed: Vec<Product>) -> Self {
        let (products, flush) =
            match storage::hydrate_json::<Vec<Product>>(store.as_ref(), keys::PRODUCTS) {
                Hydration::Value(list) => match validate_list(&list) {
                    Ok(()) => (list, true),
                    Err(e) => {
                        tracing::warn!(error = %e, "persisted catalog invalid, using seed");
                        (seed, true)
                    }
                },
                Hydration::Empty => (seed, true),
                Hydration::Unavailable => (seed, false),
            };
        let catalog = Self { products, store };
        if flush {
            catalog.persist();
        }
        catalog
    }

    /// Exact-match lookup by identifier. Absence is not an error.
    #[must_use]
    pub fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// All products in `category`, in catalog order, optionally excluding
    /// one identifier (so a product never recommends itself).
    #[must_use]
    pub fn by_category(&self, category: Category, exclude: Option<&ProductId>) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .filter(|p| exclude.is_none_or(|id| p.id != *id))
            .collect()
    }

    /// Products flagged for the featured rail, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// The whole active list, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the active list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the active list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Replace the entire product list.
    ///
    /// All subsequent lookups see the replacement immediately.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] and keeps the previous list if any record
    /// fails validation or two records share an id.
    pub fn replace(&mut self, products: Vec<Product>) -> Result<(), CatalogError> {
        validate_list(&products)?;
        self.products = products;
        self.persist();
        Ok(())
    }

    /// Admin save: field-edit an existing record in place (keyed on id) or
    /// prepend a brand-new one, exactly as the original admin panel did.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the record fails validation; the list
    /// is unchanged in that case.
    pub fn save(&mut self, product: Product) -> Result<(), CatalogError> {
        product.validate()?;
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => self.products.insert(0, product),
        }
        self.persist();
        Ok(())
    }

    /// Admin delete by identifier. Returns `true` when a record was
    /// removed; deleting an unknown id is a no-op.
    pub fn delete(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != *id);
        let removed = self.products.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    fn persist(&self) {
        storage::persist_json(self.store.as_ref(), keys::PRODUCTS, &self.products);
    }
}

/// Boundary validation for a whole candidate list.
pub(crate) fn validate_list(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    for product in products {
        product.validate()?;
        if !seen.insert(&product.id) {
            return Err(CatalogError::DuplicateId(product.id.clone()));
        }
    }
    Ok(())
}
