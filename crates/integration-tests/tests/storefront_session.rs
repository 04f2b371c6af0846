//! Whole-visit flows: browse, sign in, shop, check out.
//!
//! Run with: cargo test -p royal-integration-tests --test storefront_session

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use royal_core::{OrderStatus, ProductId};
use royal_storefront::fault::NoFaults;
use royal_storefront::storage::MemoryStore;

use royal_integration_tests::{abc_catalog, memory_session, session_over};

#[test]
fn test_fresh_session_starts_as_guest_with_seed_catalog() {
    let session = memory_session();
    assert!(session.customer().is_none());
    assert!(session.cart().is_empty());
    assert!(!session.catalog().is_empty());
    assert!(!session.catalog().featured().is_empty());
}

#[test]
fn test_identity_survives_restart() {
    let store = Arc::new(MemoryStore::new());
    let mut session = session_over(Arc::clone(&store), Box::new(NoFaults));
    session.login("Marcus").unwrap();

    let rehydrated = session_over(Arc::clone(&store), Box::new(NoFaults));
    let customer = rehydrated.customer().unwrap();
    assert_eq!(customer.name, "Marcus");
    assert_eq!(customer.email.as_str(), "marcus@royal.com");
    assert!(!customer.is_admin);

    let mut session = rehydrated;
    session.logout();
    let after = session_over(store, Box::new(NoFaults));
    assert!(after.customer().is_none());
}

#[test]
fn test_full_visit_ends_with_a_receipt() {
    let store = Arc::new(MemoryStore::new());
    let mut session = session_over(Arc::clone(&store), Box::new(NoFaults));
    session.catalog_mut().replace(abc_catalog()).unwrap();
    session.login("Ava").unwrap();

    session.add_to_cart(&ProductId::new("a")).unwrap();
    session.add_to_cart(&ProductId::new("b")).unwrap();
    session.update_quantity(&ProductId::new("b"), 1);
    let total = session.total();

    let order = session.checkout_complete().unwrap();
    assert!(order.id.as_str().starts_with("ORD-"));
    assert_eq!(order.customer_name, "Ava");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, total);
    assert_eq!(order.items.len(), 2);

    // The cart is empty in memory and in storage.
    assert!(session.cart().is_empty());
    let rehydrated = session_over(store, Box::new(NoFaults));
    assert!(rehydrated.cart().is_empty());
}

#[test]
fn test_receipt_is_a_snapshot() {
    let mut session = memory_session();
    session.catalog_mut().replace(abc_catalog()).unwrap();
    session.add_to_cart(&ProductId::new("a")).unwrap();
    let order = session.checkout_complete().unwrap();

    // Later catalog edits never rewrite the captured line.
    session.catalog_mut().delete(&ProductId::new("a"));
    assert_eq!(order.items[0].product.id, ProductId::new("a"));
}

#[test]
fn test_checkout_with_empty_cart_yields_nothing() {
    let mut session = memory_session();
    assert!(session.checkout_complete().is_none());
}

#[test]
fn test_login_rejects_an_empty_name() {
    let mut session = memory_session();
    assert!(session.login("").is_err());
    assert!(session.customer().is_none());
}
