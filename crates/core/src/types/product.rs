//! Product records.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::id::ProductId;
use super::price::Price;

/// Validation errors for a [`Product`] record.
///
/// Raised at the catalog boundary (admin save, hydration), never by
/// consumers of an already-accepted record.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The product identifier is empty.
    #[error("product id cannot be empty")]
    EmptyId,
    /// The display name is empty.
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),
}

/// A purchasable product.
///
/// Products are immutable once accepted into the catalog: an admin edit
/// replaces the whole record keyed on [`ProductId`], never a single field.
/// Price non-negativity is carried by the [`Price`] type itself; the
/// remaining field constraints live in [`Product::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    /// Image reference (URL or asset path); opaque to this crate.
    pub image: String,
    /// Whether the product appears in the featured rail.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Check the field constraints a catalog must enforce before accepting
    /// this record.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName(self.id.clone()));
        }
        Ok(())
    }
}
