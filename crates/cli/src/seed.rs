//! Startup catalog.

use stockwatch_core::{DomainResult, ProductId};
use stockwatch_products::Product;

use crate::config::SeedMode;

/// Products for the given seed mode, in catalog order.
pub fn products(mode: SeedMode) -> DomainResult<Vec<Product>> {
    match mode {
        SeedMode::Demo => demo_products(),
        SeedMode::Empty => Ok(Vec::new()),
    }
}

/// Five products across two categories.
pub fn demo_products() -> DomainResult<Vec<Product>> {
    const DEMO: [(u32, &str, &str, f64, u32, u32); 5] = [
        (101, "Laptop", "Electronics", 1000.0, 10, 5),
        (102, "Smartphone", "Electronics", 500.0, 10, 5),
        (103, "Tablet", "Electronics", 300.0, 7, 4),
        (104, "Refrigerator", "Appliances", 500.0, 5, 3),
        (105, "Microwave", "Appliances", 200.0, 8, 4),
    ];

    DEMO.iter()
        .map(|&(id, name, category, price, stock, threshold)| {
            Product::new(ProductId::new(id), name, category, price, stock, threshold)
        })
        .collect()
}
