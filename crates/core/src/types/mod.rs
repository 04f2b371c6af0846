//! Core types for the Royal storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod category;
pub mod customer;
pub mod id;
pub mod order;
pub mod price;
pub mod product;

pub use cart::{Cart, CartLine};
pub use category::Category;
pub use customer::{Customer, Email, EmailError};
pub use id::*;
pub use order::{Order, OrderStatus};
pub use price::{Price, PriceError};
pub use product::{Product, ProductError};
