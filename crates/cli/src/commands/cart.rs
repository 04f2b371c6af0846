//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! royal cart add crown-runner
//! royal cart update crown-runner --delta 2
//! royal cart remove crown-runner
//! royal cart show
//! royal cart checkout
//! ```
//!
//! `add` is subject to the configured transient failure rate, exactly like
//! the storefront it demos; a rejected add reports the retry message and
//! leaves the cart untouched.

use royal_core::ProductId;
use thiserror::Error;

use super::open_session;

/// Errors specific to cart commands.
#[derive(Debug, Error)]
pub enum CartCmdError {
    /// The identifier does not name a catalog product.
    #[error("No product with id: {0}")]
    UnknownProduct(ProductId),

    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty, nothing to check out")]
    EmptyCart,
}

/// Show the cart lines, derived totals, and suggestions.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session()?;
    let cart = session.cart();

    if cart.is_empty() {
        tracing::info!("Cart is empty");
    } else {
        for line in cart.lines() {
            tracing::info!(
                "{} x{} = {}",
                line.product.name,
                line.quantity,
                line.line_total(),
            );
        }
        tracing::info!("{} item(s), total {}", session.count(), session.total());
    }

    let picks = session.recommendations();
    if !picks.is_empty() {
        let names: Vec<&str> = picks.iter().map(|p| p.name.as_str()).collect();
        tracing::info!("People also liked: {}", names.join(", "));
    }
    Ok(())
}

/// Add one unit of a product to the cart.
pub fn add(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;
    let id = ProductId::new(id);
    if session.catalog().find_by_id(&id).is_none() {
        return Err(CartCmdError::UnknownProduct(id).into());
    }
    session.add_to_cart(&id)?;
    tracing::info!("Added {id}; cart now holds {} item(s)", session.count());
    Ok(())
}

/// Apply a signed quantity delta to a cart line.
pub fn update(id: &str, delta: i32) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;
    let id = ProductId::new(id);
    session.update_quantity(&id, delta);
    tracing::info!("Cart now holds {} item(s)", session.count());
    Ok(())
}

/// Remove a whole cart line.
pub fn remove(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;
    let id = ProductId::new(id);
    session.remove_item(&id);
    tracing::info!("Cart now holds {} item(s)", session.count());
    Ok(())
}

/// Complete checkout and report the receipt.
pub fn checkout() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session()?;
    let order = session.checkout_complete().ok_or(CartCmdError::EmptyCart)?;
    tracing::info!(
        "Order {} placed for {} ({} line(s), total {})",
        order.id,
        order.customer_name,
        order.items.len(),
        order.total,
    );
    Ok(())
}
