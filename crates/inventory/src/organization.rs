use stockwatch_core::{DomainError, DomainResult, OrganizationId, ProductId, SupplierId};
use stockwatch_parties::{AssignmentRule, Supplier, SupplierHandle, SupplierKind};
use stockwatch_products::{Catalog, Product};

use crate::router::{self, SweepReport};

/// Result of a point-of-sale transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleOutcome {
    pub product_id: ProductId,
    pub remaining_stock: u32,
    /// Whether a targeted restock request reached the selling supplier.
    pub notified: bool,
}

/// Coordinator: owns the catalog and the subscription list.
///
/// The subscription list holds [`SupplierHandle`]s only; suppliers own their own
/// lifetime. Subscribing the same supplier twice is not deduplicated.
#[derive(Debug, Default)]
pub struct Organization {
    id: OrganizationId,
    catalog: Catalog,
    rule: AssignmentRule,
    subscribers: Vec<SupplierHandle>,
}

impl Organization {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(rule: AssignmentRule) -> Self {
        Self {
            rule,
            ..Self::default()
        }
    }

    pub fn id_typed(&self) -> OrganizationId {
        self.id
    }

    pub fn rule(&self) -> &AssignmentRule {
        &self.rule
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn add_product(&mut self, product: Product) {
        self.catalog.add(product);
    }

    /// Remove every product carrying `id`; returns how many were removed.
    pub fn remove_product(&mut self, id: ProductId) -> usize {
        self.catalog.remove(id)
    }

    pub fn find_product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.catalog.find(id)
    }

    pub fn all_products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn all_products_mut(&mut self) -> &mut [Product] {
        self.catalog.products_mut()
    }

    /// Sell from the catalog. Does not notify anyone.
    pub fn sell(&mut self, product_id: ProductId, quantity: i64) -> DomainResult<u32> {
        self.catalog.sell(product_id, quantity)
    }

    pub fn subscribe_supplier(&mut self, supplier: SupplierHandle) {
        self.subscribers.push(supplier);
    }

    /// Drop every handle for `supplier`. Returns how many were removed.
    pub fn unsubscribe(&mut self, supplier: SupplierId) -> usize {
        let before = self.subscribers.len();
        self.subscribers.retain(|h| h.id() != supplier);
        before - self.subscribers.len()
    }

    /// Drop handles whose supplier no longer exists. Returns how many were removed.
    pub fn prune_closed(&mut self) -> usize {
        let before = self.subscribers.len();
        self.subscribers.retain(SupplierHandle::is_reachable);
        let pruned = before - self.subscribers.len();
        if pruned > 0 {
            tracing::info!(pruned, "closed supplier subscriptions removed");
        }
        pruned
    }

    pub fn subscribers(&self) -> &[SupplierHandle] {
        &self.subscribers
    }

    /// Products `kind` covers in the current catalog, in catalog order.
    pub fn assignments_for(&self, kind: SupplierKind) -> Vec<ProductId> {
        self.rule.assign(kind, self.catalog.iter())
    }

    /// Replace the supplier's assignment list with one computed from the current
    /// catalog.
    pub fn refresh_assignments(&self, supplier: &mut Supplier) {
        let assigned = self.assignments_for(supplier.kind());
        tracing::debug!(
            supplier = supplier.name(),
            assigned = assigned.len(),
            "supplier assignments refreshed"
        );
        supplier.replace_assignments(assigned);
    }

    /// The supplier's assigned products as currently stored, in assignment order.
    /// Ids no longer in the catalog are skipped.
    pub fn products_for_supplier(&self, supplier: &Supplier) -> Vec<&Product> {
        supplier
            .assigned_products()
            .iter()
            .filter_map(|id| self.catalog.find(*id))
            .collect()
    }

    /// Inventory sweep: broadcast every low-stock product to every subscriber.
    pub fn check_inventory_and_notify(&self) -> SweepReport {
        router::sweep(self.catalog.iter(), &self.subscribers)
    }

    /// Notify `supplier` about `product` if it needs restocking; otherwise do nothing.
    pub fn send_targeted_notification(&self, product: &Product, supplier: &Supplier) -> bool {
        router::targeted(product, &supplier.handle())
    }

    /// Whether `supplier` may sell `product_id`: the product must exist and be in the
    /// supplier's assignment list.
    pub fn check_can_sell(&self, supplier: &Supplier, product_id: ProductId) -> DomainResult<()> {
        if self.catalog.find(product_id).is_none() {
            return Err(DomainError::not_found(product_id));
        }
        if !supplier.is_assigned(product_id) {
            return Err(DomainError::unassigned(supplier.name(), product_id));
        }
        Ok(())
    }

    /// Point-of-sale flow: the supplier sells one of its assigned products, and is
    /// alerted if the sale leaves the product low on stock.
    pub fn sell_as(
        &mut self,
        supplier: &Supplier,
        product_id: ProductId,
        quantity: i64,
    ) -> DomainResult<SaleOutcome> {
        self.check_can_sell(supplier, product_id)?;

        let remaining_stock = self.catalog.sell(product_id, quantity)?;

        let product = self
            .catalog
            .find(product_id)
            .ok_or_else(|| DomainError::not_found(product_id))?;
        let notified = self.send_targeted_notification(product, supplier);

        Ok(SaleOutcome {
            product_id,
            remaining_stock,
            notified,
        })
    }
}
