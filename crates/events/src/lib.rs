//! Restock notifications and their delivery channel.

pub mod event;
pub mod mailbox;
pub mod notification;

pub use event::Event;
pub use mailbox::{Mailbox, MailboxClosed, Subscription, mailbox};
pub use notification::{DeliveryMode, RestockRequested};
