//! Catalog reset command.
//!
//! # Usage
//!
//! ```bash
//! royal seed
//! ```
//!
//! Replaces the active catalog (including any admin edits) with the
//! factory-default product list.

use royal_storefront::seed::seed_products;

use super::open_session;

/// Reset the catalog to the factory defaults.
pub fn reset() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;
    let products = seed_products();
    let count = products.len();
    session.catalog_mut().replace(products)?;
    tracing::info!("Catalog reset to {count} factory products");
    Ok(())
}
