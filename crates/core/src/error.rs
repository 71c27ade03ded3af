//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a local, recoverable rejection: callers report it and carry on.
/// Nothing here should terminate the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No product with the given id exists in the catalog.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// A sale quantity was zero or negative.
    #[error("invalid quantity {0}: must be greater than zero")]
    InvalidQuantity(i64),

    /// A sale asked for more units than are on hand.
    #[error("insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: i64,
        available: u32,
    },

    /// The acting supplier is not assigned the product it tried to sell.
    #[error("product {product_id} is not assigned to supplier {supplier}")]
    UnassignedSupplier {
        supplier: String,
        product_id: ProductId,
    },

    /// A value failed validation (e.g. empty product name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(product_id: ProductId) -> Self {
        Self::ProductNotFound(product_id)
    }

    pub fn unassigned(supplier: impl Into<String>, product_id: ProductId) -> Self {
        Self::UnassignedSupplier {
            supplier: supplier.into(),
            product_id,
        }
    }
}
