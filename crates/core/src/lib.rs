//! Royal Core - Shared types library.
//!
//! This crate provides common types used across all Royal storefront
//! components:
//! - `storefront` - Catalog, cart, and session services
//! - `cli` - Command-line driver for the storefront session
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! randomness. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, cart lines, prices, customers, and orders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
