//! Catalog browsing and management commands.
//!
//! # Usage
//!
//! ```bash
//! royal catalog list
//! royal catalog list -c Apparel
//! royal catalog remove crown-runner
//! ```

use royal_core::{Category, ProductId};
use thiserror::Error;

use super::open_session;

/// Errors specific to catalog commands.
#[derive(Debug, Error)]
pub enum CatalogCmdError {
    /// The category filter did not name a known category.
    #[error("Unknown category: {0}. Valid categories: Sneakers, Shoes, Apparel")]
    UnknownCategory(String),

    /// The product to remove does not exist.
    #[error("No product with id: {0}")]
    UnknownProduct(ProductId),
}

/// List the active catalog, optionally filtered to one category.
pub fn list(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session()?;
    let catalog = session.catalog();

    let filter = match category {
        Some(raw) => Some(
            raw.parse::<Category>()
                .map_err(|_| CatalogCmdError::UnknownCategory(raw.to_owned()))?,
        ),
        None => None,
    };

    let products: Vec<_> = match filter {
        Some(category) => catalog.by_category(category, None),
        None => catalog.products().iter().collect(),
    };

    tracing::info!("{} product(s)", products.len());
    for product in products {
        let featured = if product.featured { " [featured]" } else { "" };
        tracing::info!(
            "{}  {} - {} ({}){featured}",
            product.id,
            product.name,
            product.price,
            product.category,
        );
    }
    Ok(())
}

/// Remove a product from the catalog.
pub fn remove(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;
    let id = ProductId::new(id);
    if !session.catalog_mut().delete(&id) {
        return Err(CatalogCmdError::UnknownProduct(id).into());
    }
    tracing::info!("Removed product {id}");
    Ok(())
}
