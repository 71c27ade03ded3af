//! Point-to-point delivery channel between the organization and one supplier.
//!
//! The organization keeps only the sending half ([`Mailbox`]); the supplier owns the
//! receiving half ([`Subscription`]). Dropping the supplier closes the mailbox, so the
//! organization never extends a supplier's lifetime.

use std::sync::{Arc, Weak, mpsc};

use thiserror::Error;

/// The receiving half of a supplier's mailbox is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("mailbox closed")]
pub struct MailboxClosed;

/// Create a connected mailbox / subscription pair.
pub fn mailbox<M>() -> (Mailbox<M>, Subscription<M>) {
    let (tx, rx) = mpsc::channel();
    let alive = Arc::new(());
    (
        Mailbox {
            sender: tx,
            receiver_alive: Arc::downgrade(&alive),
        },
        Subscription {
            receiver: rx,
            _alive: alive,
        },
    )
}

/// Sending half. Cheap to clone; every clone feeds the same subscription.
#[derive(Debug)]
pub struct Mailbox<M> {
    sender: mpsc::Sender<M>,
    receiver_alive: Weak<()>,
}

impl<M> Clone for Mailbox<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            receiver_alive: self.receiver_alive.clone(),
        }
    }
}

impl<M> Mailbox<M> {
    /// Hand a message to the receiver. Never blocks.
    pub fn deliver(&self, message: M) -> Result<(), MailboxClosed> {
        self.sender.send(message).map_err(|_| MailboxClosed)
    }

    /// Whether the subscription has been dropped. Checked without sending.
    pub fn is_closed(&self) -> bool {
        self.receiver_alive.strong_count() == 0
    }
}

/// Receiving half.
///
/// Messages are received in the order they were delivered.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: mpsc::Receiver<M>,
    _alive: Arc<()>,
}

impl<M> Subscription<M> {
    /// Take every message currently queued, oldest first.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}
