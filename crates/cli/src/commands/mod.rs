//! Command implementations.
//!
//! Each command opens a fresh [`StorefrontSession`] over the configured
//! data directory, performs one operation, and reports via `tracing`.
//! State lives in the session's JSON files, so consecutive invocations
//! behave like one continuous visit.

use royal_storefront::config::ShopConfig;
use royal_storefront::session::StorefrontSession;

pub mod account;
pub mod cart;
pub mod catalog;
pub mod seed;

/// Open a session from the environment configuration.
fn open_session() -> Result<StorefrontSession, Box<dyn std::error::Error>> {
    let config = ShopConfig::from_env()?;
    Ok(StorefrontSession::open(&config))
}
