//! Parties domain module: suppliers and the rules binding them to products.

pub mod assignment;
pub mod supplier;

pub use assignment::{AssignmentRule, DEFAULT_LOCAL_CATEGORY, SupplierKind};
pub use supplier::{Supplier, SupplierHandle};
