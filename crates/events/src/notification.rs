use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockwatch_core::ProductId;

use crate::event::Event;

/// How a restock request reached the supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Inventory audit broadcast to every subscriber.
    Sweep,
    /// Point-of-sale alert to the supplier that made the sale.
    Targeted,
}

/// Event: RestockRequested.
///
/// Delivered to a supplier's mailbox; the supplier only observes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockRequested {
    pub product_id: ProductId,
    pub quantity: i64,
    pub mode: DeliveryMode,
    pub occurred_at: DateTime<Utc>,
}

impl RestockRequested {
    pub fn new(product_id: ProductId, quantity: i64, mode: DeliveryMode) -> Self {
        Self {
            product_id,
            quantity,
            mode,
            occurred_at: Utc::now(),
        }
    }
}

impl Event for RestockRequested {
    fn event_type(&self) -> &'static str {
        match self.mode {
            DeliveryMode::Sweep => "restocking.requested.sweep",
            DeliveryMode::Targeted => "restocking.requested.targeted",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
