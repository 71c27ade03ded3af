//! Restock policy.
//!
//! Every caller that decides whether to notify a supplier (inventory sweep, targeted
//! alert) goes through these functions so quantities stay consistent.

use crate::product::Product;

/// Whether the product has fallen to or below its reorder threshold.
pub fn needs_restocking(product: &Product) -> bool {
    product.stock_level() <= product.reorder_threshold()
}

/// Units to order: enough to bring stock back to twice the threshold.
///
/// Only meaningful when [`needs_restocking`] holds; otherwise the result can be
/// negative.
pub fn restock_quantity(product: &Product) -> i64 {
    i64::from(product.reorder_threshold()) * 2 - i64::from(product.stock_level())
}

/// The restock quantity, or `None` when the product is sufficiently stocked.
pub fn restock_order(product: &Product) -> Option<i64> {
    needs_restocking(product).then(|| restock_quantity(product))
}
