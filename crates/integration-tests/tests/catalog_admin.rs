//! Catalog replacement and per-record admin edits.
//!
//! Run with: cargo test -p royal-integration-tests --test catalog_admin

#![allow(clippy::unwrap_used)]

use royal_core::{Category, Price, ProductId};
use royal_storefront::catalog::CatalogError;

use royal_integration_tests::{abc_catalog, memory_session, product};

// ============================================================================
// Wholesale replacement
// ============================================================================

#[test]
fn test_replace_is_visible_to_every_lookup() {
    let mut session = memory_session();
    session.catalog_mut().replace(abc_catalog()).unwrap();

    assert!(session.catalog().find_by_id(&ProductId::new("a")).is_some());
    assert_eq!(session.catalog().by_category(Category::Sneakers, None).len(), 2);
    // Seed products are gone.
    assert!(session
        .catalog()
        .find_by_id(&ProductId::new("crown-runner"))
        .is_none());
}

#[test]
fn test_rejected_replacement_keeps_previous_list() {
    let mut session = memory_session();
    session.catalog_mut().replace(abc_catalog()).unwrap();

    let err = session
        .catalog_mut()
        .replace(vec![
            product("x", "X", 10, Category::Shoes),
            product("x", "X Again", 20, Category::Shoes),
        ])
        .unwrap_err();
    assert_eq!(err, CatalogError::DuplicateId(ProductId::new("x")));
    assert_eq!(session.catalog().len(), 3);
}

// ============================================================================
// Admin save and delete
// ============================================================================

#[test]
fn test_save_edit_keeps_position() {
    let mut session = memory_session();
    session.catalog_mut().replace(abc_catalog()).unwrap();

    let mut edited = product("b", "Product B", 75, Category::Sneakers);
    edited.featured = true;
    session.catalog_mut().save(edited).unwrap();

    let products = session.catalog().products();
    assert_eq!(products[1].id, ProductId::new("b"));
    assert_eq!(products[1].price, Price::from_whole(75));
    assert!(products[1].featured);
    assert_eq!(products.len(), 3);
}

#[test]
fn test_save_new_record_prepends() {
    let mut session = memory_session();
    session.catalog_mut().replace(abc_catalog()).unwrap();

    session
        .catalog_mut()
        .save(product("d", "Product D", 60, Category::Shoes))
        .unwrap();
    assert_eq!(session.catalog().products()[0].id, ProductId::new("d"));
    assert_eq!(session.catalog().len(), 4);
}

#[test]
fn test_delete_does_not_touch_existing_cart_lines() {
    let mut session = memory_session();
    session.catalog_mut().replace(abc_catalog()).unwrap();
    session.add_to_cart(&ProductId::new("a")).unwrap();

    assert!(session.catalog_mut().delete(&ProductId::new("a")));
    // The cart line carries its own product snapshot.
    assert_eq!(session.count(), 1);
    assert_eq!(session.total(), Price::from_whole(100));
    // But a new add of the deleted id is ignored.
    session.add_to_cart(&ProductId::new("a")).unwrap();
    assert_eq!(session.count(), 1);
}

#[test]
fn test_featured_rail_follows_edits() {
    let mut session = memory_session();
    session.catalog_mut().replace(abc_catalog()).unwrap();
    assert!(session.catalog().featured().is_empty());

    let mut featured = product("c", "Product C", 30, Category::Apparel);
    featured.featured = true;
    session.catalog_mut().save(featured).unwrap();
    assert_eq!(session.catalog().featured().len(), 1);
}
