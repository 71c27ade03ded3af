use stockwatch_parties::Supplier;

use crate::organization::Organization;

/// Supplier-side entry point for joining an organization.
pub trait SubscribeToOrganization {
    /// Register with `organization` and snapshot the products this supplier covers.
    ///
    /// Products added to the catalog afterwards are not picked up; see
    /// [`Organization::refresh_assignments`].
    fn subscribe_to_organization(&mut self, organization: &mut Organization);
}

impl SubscribeToOrganization for Supplier {
    fn subscribe_to_organization(&mut self, organization: &mut Organization) {
        organization.subscribe_supplier(self.handle());

        let assigned = organization.assignments_for(self.kind());
        tracing::info!(
            supplier = self.name(),
            kind = %self.kind(),
            organization = %organization.id_typed(),
            assigned = assigned.len(),
            "supplier subscribed"
        );
        self.record_subscription(organization.id_typed(), assigned);
    }
}
