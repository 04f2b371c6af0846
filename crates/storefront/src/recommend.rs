//! "People also liked" derivation.
//!
//! A read-only projection over the current cart and catalog. There are
//! exactly two branches, decided purely by cart emptiness: an empty cart
//! gets generic discovery suggestions in catalog order; otherwise the
//! suggestions share the category of the most recently added line,
//! excluding that product itself. When that category has no other members
//! the result is simply empty - no fallback.

use royal_core::{Cart, Product};

use crate::catalog::CatalogStore;

/// Derive up to `limit` suggestions for the current cart.
#[must_use]
pub fn also_liked<'a>(cart: &Cart, catalog: &'a CatalogStore, limit: usize) -> Vec<&'a Product> {
    let Some(last) = cart.last_added() else {
        return catalog.products().iter().take(limit).collect();
    };
    let mut hits = catalog.by_category(last.product.category, Some(&last.product.id));
    hits.truncate(limit);
    hits
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use royal_core::{Category, Price, ProductId};

    use super::*;
    use crate::storage::MemoryStore;

    fn product(id: &str, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_whole(40),
            category,
            image: String::new(),
            featured: false,
        }
    }

    fn catalog() -> CatalogStore {
        CatalogStore::load(
            Arc::new(MemoryStore::new()),
            vec![
                product("a", Category::Sneakers),
                product("b", Category::Sneakers),
                product("c", Category::Apparel),
                product("d", Category::Sneakers),
                product("e", Category::Shoes),
            ],
        )
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_empty_cart_gets_catalog_order_discovery() {
        let catalog = catalog();
        let picks = also_liked(&Cart::new(), &catalog, 4);
        assert_eq!(ids(&picks), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_cart_respects_limit() {
        let catalog = catalog();
        assert_eq!(also_liked(&Cart::new(), &catalog, 2).len(), 2);
    }

    #[test]
    fn test_follows_last_added_category_excluding_itself() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(catalog.find_by_id(&ProductId::new("c")).unwrap());
        let b = catalog.find_by_id(&ProductId::new("b")).unwrap().clone();
        cart.add(&b);
        let picks = also_liked(&cart, &catalog, 4);
        assert_eq!(ids(&picks), ["a", "d"]);
    }

    #[test]
    fn test_incrementing_does_not_change_last_added() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let a = catalog.find_by_id(&ProductId::new("a")).unwrap().clone();
        let c = catalog.find_by_id(&ProductId::new("c")).unwrap().clone();
        cart.add(&a);
        cart.add(&c);
        cart.add(&a); // increments the first line; c stays most recent
        let picks = also_liked(&cart, &catalog, 4);
        assert!(ids(&picks).is_empty(), "c is the only Apparel product");
    }

    #[test]
    fn test_lone_category_yields_empty_list() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let e = catalog.find_by_id(&ProductId::new("e")).unwrap().clone();
        cart.add(&e);
        assert!(also_liked(&cart, &catalog, 4).is_empty());
    }

    #[test]
    fn test_never_mutates_cart() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let a = catalog.find_by_id(&ProductId::new("a")).unwrap().clone();
        cart.add(&a);
        let before = cart.clone();
        let _ = also_liked(&cart, &catalog, 4);
        assert_eq!(cart, before);
    }
}
