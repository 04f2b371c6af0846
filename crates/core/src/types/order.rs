//! Order receipts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cart::CartLine;
use super::id::OrderId;
use super::price::Price;

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Shipped => write!(f, "Shipped"),
            Self::Delivered => write!(f, "Delivered"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// The receipt produced when checkout completes.
///
/// The total and line items are captured at checkout time; later catalog
/// edits never rewrite an existing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub date: NaiveDate,
    pub total: Price,
    pub status: OrderStatus,
    pub items: Vec<CartLine>,
}
