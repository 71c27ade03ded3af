use serde::{Deserialize, Serialize};

use stockwatch_core::{DomainError, DomainResult, Entity, ProductId};

use crate::policy;

/// Catalog entry: Product.
///
/// Only `stock_level` changes after construction, through [`Product::sell`] or
/// [`Product::set_stock_level`]. Stock is unsigned, so it can never go negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    price: f64,
    stock_level: u32,
    reorder_threshold: u32,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock_level: u32,
        reorder_threshold: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        let category = category.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation("price must be a non-negative number"));
        }

        Ok(Self {
            id,
            name,
            category,
            price,
            stock_level,
            reorder_threshold,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock_level(&self) -> u32 {
        self.stock_level
    }

    pub fn reorder_threshold(&self) -> u32 {
        self.reorder_threshold
    }

    /// Remove `quantity` units from stock and return the remaining level.
    ///
    /// Rejects non-positive quantities and quantities above the current stock; a
    /// rejected sale leaves stock untouched.
    pub fn sell(&mut self, quantity: i64) -> DomainResult<u32> {
        if quantity <= 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }

        let available = i64::from(self.stock_level);
        if quantity > available {
            return Err(DomainError::InsufficientStock {
                product_id: self.id,
                requested: quantity,
                available: self.stock_level,
            });
        }

        // quantity is in 1..=stock_level, so the difference fits in u32.
        self.stock_level = (available - quantity) as u32;
        tracing::debug!(
            product_id = %self.id,
            sold = quantity,
            remaining = self.stock_level,
            "sale recorded"
        );
        Ok(self.stock_level)
    }

    /// Overwrite the stock level (stock count correction, delivery received).
    pub fn set_stock_level(&mut self, stock_level: u32) {
        self.stock_level = stock_level;
    }

    pub fn needs_restocking(&self) -> bool {
        policy::needs_restocking(self)
    }

    pub fn restock_quantity(&self) -> i64 {
        policy::restock_quantity(self)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
