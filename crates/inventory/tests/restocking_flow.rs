//! End-to-end restocking scenarios over a seeded organization.

use stockwatch_core::{DomainError, ProductId};
use stockwatch_events::DeliveryMode;
use stockwatch_inventory::{Organization, SubscribeToOrganization};
use stockwatch_parties::{Supplier, SupplierKind};
use stockwatch_products::Product;

fn product(id: u32, name: &str, category: &str, price: f64, stock: u32, threshold: u32) -> Product {
    Product::new(ProductId::new(id), name, category, price, stock, threshold).unwrap()
}

fn seeded_organization() -> Organization {
    let mut org = Organization::new();
    org.add_product(product(101, "Laptop", "Electronics", 1000.0, 10, 5));
    org.add_product(product(102, "Smartphone", "Electronics", 500.0, 10, 5));
    org.add_product(product(103, "Tablet", "Electronics", 300.0, 7, 4));
    org.add_product(product(104, "Refrigerator", "Appliances", 500.0, 5, 3));
    org.add_product(product(105, "Microwave", "Appliances", 200.0, 8, 4));
    org
}

fn subscribed_pair(org: &mut Organization) -> (Supplier, Supplier) {
    let mut local = Supplier::new("Local Supplier", SupplierKind::Local).unwrap();
    let mut global = Supplier::new("Global Supplier", SupplierKind::Global).unwrap();
    local.subscribe_to_organization(org);
    global.subscribe_to_organization(org);
    (local, global)
}

fn ids(raw: &[u32]) -> Vec<ProductId> {
    raw.iter().copied().map(ProductId::new).collect()
}

#[test]
fn local_and_global_partition_the_catalog() {
    let mut org = seeded_organization();
    let (local, global) = subscribed_pair(&mut org);

    assert_eq!(local.assigned_products(), ids(&[101, 102, 103]).as_slice());
    assert_eq!(global.assigned_products(), ids(&[104, 105]).as_slice());
}

#[test]
fn laptop_sale_drops_below_threshold() {
    let mut org = Organization::new();
    org.add_product(product(101, "Laptop", "Electronics", 1000.0, 10, 5));

    assert_eq!(org.sell(ProductId::new(101), 6).unwrap(), 4);

    let laptop = org.find_product_by_id(ProductId::new(101)).unwrap();
    assert_eq!(laptop.stock_level(), 4);
    assert!(laptop.needs_restocking());
    assert_eq!(laptop.restock_quantity(), 6);
}

#[test]
fn sweep_on_well_stocked_catalog_notifies_nobody() {
    let mut org = seeded_organization();
    let (local, global) = subscribed_pair(&mut org);

    let report = org.check_inventory_and_notify();

    assert!(report.is_all_stocked());
    assert_eq!(report.deliveries, 0);
    assert!(local.received().is_empty());
    assert!(global.received().is_empty());
}

#[test]
fn sweep_broadcasts_to_every_subscriber_regardless_of_assignment() {
    let mut org = seeded_organization();
    let (local, global) = subscribed_pair(&mut org);

    // Refrigerator is only assigned to the global supplier.
    org.sell(ProductId::new(104), 3).unwrap();

    let report = org.check_inventory_and_notify();
    assert_eq!(report.alerts.len(), 1);
    assert_eq!(report.alerts[0].product_id, ProductId::new(104));
    assert_eq!(report.alerts[0].quantity, 4);
    assert_eq!(report.deliveries, 2);

    for supplier in [&local, &global] {
        let received = supplier.received();
        assert_eq!(received.len(), 1, "{} should get one request", supplier.name());
        assert_eq!(received[0].product_id, ProductId::new(104));
        assert_eq!(received[0].quantity, 4);
        assert_eq!(received[0].mode, DeliveryMode::Sweep);
    }
}

#[test]
fn targeted_notification_skips_well_stocked_product() {
    let mut org = seeded_organization();
    let (local, _global) = subscribed_pair(&mut org);

    let laptop = org.find_product_by_id(ProductId::new(101)).unwrap();
    assert!(!org.send_targeted_notification(laptop, &local));
    assert!(local.received().is_empty());
}

#[test]
fn targeted_notification_reaches_only_that_supplier() {
    let mut org = seeded_organization();
    let (local, global) = subscribed_pair(&mut org);
    org.sell(ProductId::new(103), 3).unwrap();

    let tablet = org.find_product_by_id(ProductId::new(103)).unwrap();
    assert!(org.send_targeted_notification(tablet, &local));

    let received = local.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].quantity, 4);
    assert_eq!(received[0].mode, DeliveryMode::Targeted);
    assert!(global.received().is_empty());
}

#[test]
fn assignment_is_a_snapshot() {
    let mut org = seeded_organization();
    let (local, _global) = subscribed_pair(&mut org);

    org.add_product(product(106, "Headphones", "Electronics", 80.0, 1, 2));

    assert!(!local.is_assigned(ProductId::new(106)));
    assert_eq!(local.assigned_products().len(), 3);

    // The sweep is not filtered by assignment, so the new product still goes out.
    let report = org.check_inventory_and_notify();
    assert_eq!(report.alerts.len(), 1);
    assert_eq!(local.received()[0].product_id, ProductId::new(106));
}

#[test]
fn sale_by_assigned_supplier_triggers_targeted_alert() {
    let mut org = seeded_organization();
    let (local, global) = subscribed_pair(&mut org);

    let outcome = org.sell_as(&local, ProductId::new(101), 6).unwrap();
    assert_eq!(outcome.remaining_stock, 4);
    assert!(outcome.notified);

    let received = local.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].product_id, ProductId::new(101));
    assert_eq!(received[0].quantity, 6);
    assert!(global.received().is_empty());
}

#[test]
fn sale_above_threshold_sends_nothing() {
    let mut org = seeded_organization();
    let (local, _global) = subscribed_pair(&mut org);

    let outcome = org.sell_as(&local, ProductId::new(101), 2).unwrap();
    assert_eq!(outcome.remaining_stock, 8);
    assert!(!outcome.notified);
    assert!(local.received().is_empty());
}

#[test]
fn sale_of_unassigned_product_is_rejected() {
    let mut org = seeded_organization();
    let (local, _global) = subscribed_pair(&mut org);

    let err = org.sell_as(&local, ProductId::new(104), 1).unwrap_err();
    assert_eq!(
        err,
        DomainError::UnassignedSupplier {
            supplier: "Local Supplier".to_string(),
            product_id: ProductId::new(104),
        }
    );
    assert_eq!(org.find_product_by_id(ProductId::new(104)).unwrap().stock_level(), 5);
}

#[test]
fn oversell_is_rejected_and_stock_kept() {
    let mut org = seeded_organization();
    let (_local, global) = subscribed_pair(&mut org);

    let err = org.sell_as(&global, ProductId::new(105), 9).unwrap_err();
    assert_eq!(
        err,
        DomainError::InsufficientStock {
            product_id: ProductId::new(105),
            requested: 9,
            available: 8,
        }
    );
    assert_eq!(org.find_product_by_id(ProductId::new(105)).unwrap().stock_level(), 8);
    assert!(global.received().is_empty());
}

#[test]
fn dropped_supplier_does_not_break_sweeps() {
    let mut org = seeded_organization();
    let (local, global) = subscribed_pair(&mut org);
    drop(global);

    org.sell(ProductId::new(102), 10).unwrap();
    let report = org.check_inventory_and_notify();

    assert_eq!(report.alerts.len(), 1);
    assert_eq!(report.deliveries, 1);
    assert_eq!(local.received().len(), 1);
    assert_eq!(org.subscribers().len(), 2);
}
