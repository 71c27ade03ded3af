//! Supplier variants and the category rule that decides which products each covers.

use serde::{Deserialize, Serialize};

use stockwatch_core::ProductId;
use stockwatch_products::Product;

/// Category served by local suppliers unless configured otherwise.
pub const DEFAULT_LOCAL_CATEGORY: &str = "Electronics";

/// Supplier capability variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierKind {
    Local,
    Global,
}

impl SupplierKind {
    pub fn label(self) -> &'static str {
        match self {
            SupplierKind::Local => "Local",
            SupplierKind::Global => "Global",
        }
    }

    /// How the supplier acknowledges a restock request.
    pub fn fulfilment_note(self) -> &'static str {
        match self {
            SupplierKind::Local => "will restock immediately",
            SupplierKind::Global => "will process restocking (may take longer)",
        }
    }
}

impl core::fmt::Display for SupplierKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Category predicate table for supplier variants.
///
/// Local suppliers cover exactly `local_category`; global suppliers cover every other
/// category. The two sets partition any catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRule {
    pub local_category: String,
}

impl Default for AssignmentRule {
    fn default() -> Self {
        Self {
            local_category: DEFAULT_LOCAL_CATEGORY.to_string(),
        }
    }
}

impl AssignmentRule {
    pub fn new(local_category: impl Into<String>) -> Self {
        Self {
            local_category: local_category.into(),
        }
    }

    pub fn covers(&self, kind: SupplierKind, product: &Product) -> bool {
        let local = product.category() == self.local_category;
        match kind {
            SupplierKind::Local => local,
            SupplierKind::Global => !local,
        }
    }

    /// Ids of the products `kind` covers, in catalog order.
    pub fn assign<'a>(
        &self,
        kind: SupplierKind,
        products: impl IntoIterator<Item = &'a Product>,
    ) -> Vec<ProductId> {
        products
            .into_iter()
            .filter(|p| self.covers(kind, p))
            .map(Product::id_typed)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, category: &str) -> Product {
        Product::new(ProductId::new(id), format!("P{id}"), category, 1.0, 5, 2).unwrap()
    }

    fn mixed() -> Vec<Product> {
        vec![
            product(101, "Electronics"),
            product(104, "Appliances"),
            product(102, "Electronics"),
            product(105, "Garden"),
        ]
    }

    #[test]
    fn local_covers_only_the_local_category() {
        let ids = AssignmentRule::default().assign(SupplierKind::Local, &mixed());
        assert_eq!(ids, vec![ProductId::new(101), ProductId::new(102)]);
    }

    #[test]
    fn global_covers_the_complement() {
        let ids = AssignmentRule::default().assign(SupplierKind::Global, &mixed());
        assert_eq!(ids, vec![ProductId::new(104), ProductId::new(105)]);
    }

    #[test]
    fn category_match_is_exact() {
        let rule = AssignmentRule::default();
        assert!(!rule.covers(SupplierKind::Local, &product(1, "electronics")));
        assert!(rule.covers(SupplierKind::Global, &product(1, "electronics")));
    }

    #[test]
    fn configured_category_changes_the_split() {
        let rule = AssignmentRule::new("Appliances");
        assert_eq!(
            rule.assign(SupplierKind::Local, &mixed()),
            vec![ProductId::new(104)]
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every product is covered by exactly one supplier kind.
            #[test]
            fn kinds_partition_any_catalog(
                categories in prop::collection::vec(prop::sample::select(vec!["Electronics", "Appliances", "Garden"]), 0..20)
            ) {
                let products: Vec<Product> = categories
                    .iter()
                    .enumerate()
                    .map(|(i, c)| product(i as u32, c))
                    .collect();
                let rule = AssignmentRule::default();

                let local = rule.assign(SupplierKind::Local, &products);
                let global = rule.assign(SupplierKind::Global, &products);

                prop_assert_eq!(local.len() + global.len(), products.len());
                prop_assert!(local.iter().all(|id| !global.contains(id)));
                for p in &products {
                    let expected = if p.category() == "Electronics" { &local } else { &global };
                    prop_assert!(expected.contains(&p.id_typed()));
                }
            }
        }
    }
}
