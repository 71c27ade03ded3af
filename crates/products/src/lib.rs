//! Products domain module.
//!
//! Catalog entries, stock mutation and the restock policy, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod catalog;
pub mod policy;
pub mod product;

pub use catalog::Catalog;
pub use policy::{needs_restocking, restock_order, restock_quantity};
pub use product::Product;
