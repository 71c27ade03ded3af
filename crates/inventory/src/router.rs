//! Restock notification routing.
//!
//! Two delivery modes share the same restock policy:
//! - **sweep**: every low-stock product is broadcast to every subscriber, regardless
//!   of assignment
//! - **targeted**: one product, one supplier, only if the product needs restocking

use serde::Serialize;

use stockwatch_core::ProductId;
use stockwatch_events::{DeliveryMode, RestockRequested};
use stockwatch_parties::SupplierHandle;
use stockwatch_products::{Product, restock_order};

/// One low-stock product found by a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestockAlert {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: i64,
}

/// Outcome of an inventory sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Low-stock products, in catalog order.
    pub alerts: Vec<RestockAlert>,
    /// Requests actually handed to a live supplier.
    pub deliveries: usize,
}

impl SweepReport {
    /// True when no product needed restocking.
    pub fn is_all_stocked(&self) -> bool {
        self.alerts.is_empty()
    }
}

/// Broadcast a restock request for every low-stock product to every subscriber.
pub fn sweep<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    subscribers: &[SupplierHandle],
) -> SweepReport {
    let mut report = SweepReport::default();

    for product in products {
        let Some(quantity) = restock_order(product) else {
            continue;
        };

        tracing::info!(
            product_id = %product.id_typed(),
            product = product.name(),
            stock = product.stock_level(),
            quantity,
            "low stock alert"
        );

        for subscriber in subscribers {
            let request = RestockRequested::new(product.id_typed(), quantity, DeliveryMode::Sweep);
            if subscriber.notify_restock(request) {
                report.deliveries += 1;
            }
        }

        report.alerts.push(RestockAlert {
            product_id: product.id_typed(),
            name: product.name().to_string(),
            quantity,
        });
    }

    if report.is_all_stocked() {
        tracing::info!("all products are well-stocked; no restocking needed");
    }

    report
}

/// Notify one supplier about one product, if it needs restocking.
///
/// Returns whether a request was delivered. A sufficiently stocked product is a
/// silent no-op.
pub fn targeted(product: &Product, supplier: &SupplierHandle) -> bool {
    match restock_order(product) {
        Some(quantity) => {
            tracing::info!(
                product_id = %product.id_typed(),
                product = product.name(),
                supplier = supplier.name(),
                quantity,
                "targeted restock notification"
            );
            supplier.notify_restock(RestockRequested::new(
                product.id_typed(),
                quantity,
                DeliveryMode::Targeted,
            ))
        }
        None => {
            tracing::debug!(
                product_id = %product.id_typed(),
                supplier = supplier.name(),
                "stock above threshold; targeted notification skipped"
            );
            false
        }
    }
}
