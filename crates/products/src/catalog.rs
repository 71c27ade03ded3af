//! The organization's ordered product collection.

use stockwatch_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::Product;

/// Ordered collection of products.
///
/// Insertion order is preserved and is the order inventory sweeps walk. Product id
/// uniqueness is the caller's responsibility: with duplicates, lookups return the
/// first match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Remove every entry carrying `id`. Returns how many were removed.
    pub fn remove(&mut self, id: ProductId) -> usize {
        let before = self.products.len();
        self.products.retain(|p| *p.id() != id);
        before - self.products.len()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| *p.id() == id)
    }

    pub fn find_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| *p.id() == id)
    }

    /// Sell from the first product carrying `id`.
    pub fn sell(&mut self, id: ProductId, quantity: i64) -> DomainResult<u32> {
        self.find_mut(id)
            .ok_or_else(|| DomainError::not_found(id))?
            .sell(quantity)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Mutable view over the entries; the set of entries itself cannot change.
    pub fn products_mut(&mut self) -> &mut [Product] {
        &mut self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str, stock: u32) -> Product {
        Product::new(ProductId::new(id), name, "Appliances", 100.0, stock, 3).unwrap()
    }

    #[test]
    fn find_returns_first_match_for_duplicate_ids() {
        let mut catalog = Catalog::new();
        catalog.add(product(1, "First", 5));
        catalog.add(product(1, "Second", 9));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find(ProductId::new(1)).unwrap().name(), "First");
    }

    #[test]
    fn remove_drops_all_matching_entries() {
        let mut catalog: Catalog = [product(1, "A", 5), product(2, "B", 5), product(1, "C", 5)]
            .into_iter()
            .collect();

        assert_eq!(catalog.remove(ProductId::new(1)), 2);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find(ProductId::new(1)).is_none());
        assert_eq!(catalog.remove(ProductId::new(99)), 0);
    }

    #[test]
    fn sell_unknown_product_is_not_found() {
        let mut catalog = Catalog::new();
        assert_eq!(
            catalog.sell(ProductId::new(5), 1).unwrap_err(),
            DomainError::ProductNotFound(ProductId::new(5))
        );
    }

    #[test]
    fn sell_mutates_the_stored_product() {
        let mut catalog = Catalog::new();
        catalog.add(product(3, "Microwave", 8));

        assert_eq!(catalog.sell(ProductId::new(3), 5).unwrap(), 3);
        assert_eq!(catalog.find(ProductId::new(3)).unwrap().stock_level(), 3);
    }

    #[test]
    fn mutable_view_reaches_stored_products() {
        let mut catalog = Catalog::new();
        catalog.add(product(3, "Microwave", 8));

        for p in catalog.products_mut() {
            p.set_stock_level(0);
        }
        assert_eq!(catalog.products()[0].stock_level(), 0);
    }
}
