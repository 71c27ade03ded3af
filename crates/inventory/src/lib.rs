//! Inventory coordination: the organization that owns the catalog, keeps the
//! supplier subscription list and routes restock notifications.
//!
//! Everything here is synchronous and runs to completion; callers that share an
//! [`Organization`] across requests must serialize access to it.

pub mod organization;
pub mod router;
pub mod subscription;

pub use organization::{Organization, SaleOutcome};
pub use router::{RestockAlert, SweepReport};
pub use subscription::SubscribeToOrganization;
