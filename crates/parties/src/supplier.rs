use stockwatch_core::{DomainError, DomainResult, Entity, OrganizationId, ProductId, SupplierId};
use stockwatch_events::{DeliveryMode, Event, Mailbox, RestockRequested, Subscription, mailbox};

use crate::assignment::SupplierKind;

/// A supplier that receives restock requests.
///
/// The supplier owns its inbox. Organizations only ever hold a [`SupplierHandle`],
/// so dropping the supplier ends delivery without touching the organization.
#[derive(Debug)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    kind: SupplierKind,
    assigned: Vec<ProductId>,
    organization: Option<OrganizationId>,
    mailbox: Mailbox<RestockRequested>,
    inbox: Subscription<RestockRequested>,
}

impl Supplier {
    pub fn new(name: impl Into<String>, kind: SupplierKind) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("supplier name cannot be empty"));
        }

        let (mailbox, inbox) = mailbox();
        Ok(Self {
            id: SupplierId::new(),
            name,
            kind,
            assigned: Vec::new(),
            organization: None,
            mailbox,
            inbox,
        })
    }

    pub fn id_typed(&self) -> SupplierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SupplierKind {
        self.kind
    }

    /// Organization this supplier last subscribed to, if any.
    pub fn organization(&self) -> Option<OrganizationId> {
        self.organization
    }

    /// Product ids bound at subscription time, in catalog order.
    pub fn assigned_products(&self) -> &[ProductId] {
        &self.assigned
    }

    pub fn is_assigned(&self, product_id: ProductId) -> bool {
        self.assigned.contains(&product_id)
    }

    /// Delivery endpoint for an organization's subscription list.
    pub fn handle(&self) -> SupplierHandle {
        SupplierHandle {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind,
            mailbox: self.mailbox.clone(),
        }
    }

    /// Record a subscription. Assignments are appended, so subscribing twice
    /// duplicates them.
    pub fn record_subscription(&mut self, organization: OrganizationId, assigned: Vec<ProductId>) {
        self.organization = Some(organization);
        self.assigned.extend(assigned);
    }

    /// Replace the assignment list with a fresh snapshot.
    pub fn replace_assignments(&mut self, assigned: Vec<ProductId>) {
        self.assigned = assigned;
    }

    /// Receive a restock request directly, tagged with the given delivery mode.
    pub fn notify_restock(&self, product_id: ProductId, quantity: i64, mode: DeliveryMode) -> bool {
        self.handle()
            .notify_restock(RestockRequested::new(product_id, quantity, mode))
    }

    /// Take every restock request received so far, oldest first.
    pub fn received(&self) -> Vec<RestockRequested> {
        self.inbox.drain()
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Non-owning reference to a supplier, held in subscription lists.
#[derive(Debug, Clone)]
pub struct SupplierHandle {
    id: SupplierId,
    name: String,
    kind: SupplierKind,
    mailbox: Mailbox<RestockRequested>,
}

impl SupplierHandle {
    pub fn id(&self) -> SupplierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SupplierKind {
        self.kind
    }

    /// Whether the supplier behind this handle still exists.
    pub fn is_reachable(&self) -> bool {
        !self.mailbox.is_closed()
    }

    /// Fire-and-forget delivery. Returns whether the supplier was still reachable.
    pub fn notify_restock(&self, request: RestockRequested) -> bool {
        let product_id = request.product_id;
        let quantity = request.quantity;
        let event = request.event_type();
        let schema = request.version();
        let occurred_at = request.occurred_at();

        match self.mailbox.deliver(request) {
            Ok(()) => {
                tracing::info!(
                    supplier = %self.name,
                    kind = %self.kind,
                    product_id = %product_id,
                    quantity,
                    event,
                    schema,
                    %occurred_at,
                    "{} supplier {}",
                    self.kind,
                    self.kind.fulfilment_note()
                );
                true
            }
            Err(err) => {
                tracing::warn!(
                    supplier = %self.name,
                    product_id = %product_id,
                    event,
                    %occurred_at,
                    %err,
                    "restock request dropped"
                );
                false
            }
        }
    }
}
