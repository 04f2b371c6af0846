//! Cart and cart line types.
//!
//! A [`Cart`] is an ordered sequence of [`CartLine`]s keyed by product
//! identifier. The ordering is the insertion order of each product's first
//! add; re-adding a product increments its existing line in place and never
//! moves it. These are pure list transformations - persistence, fault
//! handling, and notification live in the storefront's cart engine.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::product::Product;

/// One cart entry: a product and how many of it the shopper wants.
///
/// Quantity is always at least 1; a line that would drop to 0 must be
/// removed from the cart instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Create a fresh line for a product. New lines always start at
    /// quantity 1.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// The ordered set of products a shopper intends to purchase.
///
/// Lines are private so every mutation path flows through the methods that
/// uphold the invariants: at most one line per product id, every quantity
/// at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// All lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not the quantity sum; see [`Cart::count`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Look up the line for a product id, if present.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == *id)
    }

    /// The line most recently added to the cart (last in insertion order).
    ///
    /// Incrementing an existing line does not make it "most recent"; only a
    /// first add does.
    #[must_use]
    pub fn last_added(&self) -> Option<&CartLine> {
        self.lines.last()
    }

    /// Add one unit of a product.
    ///
    /// If a line for the product already exists its quantity is incremented
    /// in place; otherwise a new line with quantity 1 is appended. Repeated
    /// adds therefore never create duplicate lines.
    pub fn add(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::new(product.clone())),
        }
    }

    /// Apply a signed quantity delta to the line for `id`, clamping at a
    /// floor of 1. A delta that would drive the quantity to 0 or below is
    /// not a removal; the line stays at quantity 1.
    ///
    /// Returns `false` (and leaves the cart untouched) when no line for
    /// `id` exists.
    pub fn adjust_quantity(&mut self, id: &ProductId, delta: i32) -> bool {
        let Some(line) = self.lines.iter_mut().find(|l| l.product.id == *id) else {
            return false;
        };
        let next = i64::from(line.quantity) + i64::from(delta);
        line.quantity = u32::try_from(next.clamp(1, i64::from(u32::MAX))).unwrap_or(1);
        true
    }

    /// Remove the line for `id`, if present. This is the only operation
    /// that can drop a whole line.
    ///
    /// Returns `true` when a line was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id != *id);
        self.lines.len() != before
    }

    /// Drop every line (checkout completion).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price x quantity` over all lines, recomputed fresh.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines (badge count, not line count).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |sum, line| sum.saturating_add(line.quantity))
    }

    /// Whether a hydrated cart satisfies the structural invariants: no
    /// duplicate product ids and no zero quantities. Serde enforces the
    /// field-level constraints; this catches cross-line ones, so callers
    /// hydrating persisted state can treat a violation as malformed data.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        if self.lines.iter().any(|line| line.quantity == 0) {
            return false;
        }
        let mut seen = std::collections::HashSet::new();
        self.lines.iter().all(|line| seen.insert(&line.product.id))
    }
}
