use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::price::PriceRule;
use crate::repository::PriceRuleStore;

/// Immutable, in-process rule store.
///
/// Holds a fixed snapshot of rules and answers lookups by scanning it. Useful
/// for embedding the resolver without a database and for exercising it in
/// tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleStore {
    rules: Vec<PriceRule>,
}

impl InMemoryRuleStore {
    pub fn new(rules: Vec<PriceRule>) -> Self {
        Self { rules }
    }

    /// All rules held by the store, in insertion order.
    pub fn rules(&self) -> &[PriceRule] {
        &self.rules
    }
}

impl FromIterator<PriceRule> for InMemoryRuleStore {
    fn from_iter<I: IntoIterator<Item = PriceRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PriceRuleStore for InMemoryRuleStore {
    fn candidates_for(&self, product_id: i32, brand_id: i32) -> RepositoryResult<Vec<PriceRule>> {
        Ok(self
            .rules
            .iter()
            .filter(|rule| rule.product_id == product_id && rule.brand_id == brand_id)
            .cloned()
            .collect())
    }
}
