//! Factory-default product catalog.
//!
//! Used whenever no valid persisted catalog exists, and by the CLI `seed`
//! command to reset the store to a known state.

use royal_core::{Category, Price, Product, ProductId};

fn product(id: &str, name: &str, price: u64, category: Category, featured: bool) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_whole(price),
        category,
        image: format!("/img/{id}.jpg"),
        featured,
    }
}

/// The factory-default product list, in display order.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    vec![
        product("crown-runner", "Crown Runner Sneakers", 100, Category::Sneakers, true),
        product("regal-high", "Regal High Sneakers", 120, Category::Sneakers, true),
        product("velvet-loafer", "Velvet Loafer", 85, Category::Shoes, false),
        product("monarch-oxford", "Monarch Oxford", 140, Category::Shoes, false),
        product("scepter-hoodie", "Scepter Hoodie", 75, Category::Apparel, true),
        product("dynasty-tee", "Dynasty Tee", 30, Category::Apparel, false),
        product("throne-court", "Throne Court Sneakers", 95, Category::Sneakers, false),
        product("heritage-varsity", "Heritage Varsity Jacket", 160, Category::Apparel, false),
    ]
}
