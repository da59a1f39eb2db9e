//! Selection of the single price rule in effect at a given instant.

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::price::{PriceResolutionQuery, PriceRule};
use crate::repository::PriceRuleStore;

/// Resolves price queries against a borrowed [`PriceRuleStore`].
///
/// The resolver keeps no state of its own: every call reads a fresh set of
/// candidates from the store, so any number of resolvers may share one store
/// concurrently as long as the store's reads are thread-safe.
pub struct PriceResolver<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> PriceResolver<'a, S>
where
    S: PriceRuleStore + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Returns the rule that applies to `query`, or `None` when no rule for the
    /// product and brand covers `query.as_of`.
    ///
    /// Store failures are returned as-is.
    pub fn resolve(&self, query: &PriceResolutionQuery) -> RepositoryResult<Option<PriceRule>> {
        let candidates = self
            .store
            .candidates_for(query.product_id, query.brand_id)?;

        Ok(select_effective_rule(candidates, query.as_of))
    }
}

/// Picks the rule with the highest precedence among those whose closed
/// validity window contains `as_of`.
pub fn select_effective_rule(
    candidates: impl IntoIterator<Item = PriceRule>,
    as_of: NaiveDateTime,
) -> Option<PriceRule> {
    candidates
        .into_iter()
        .filter(|rule| rule.applies_at(as_of))
        .max_by(precedence)
}

// Priority first; equal priorities fall back to the most recent start, then to
// the highest id, so the outcome never depends on the store's ordering.
fn precedence(left: &PriceRule, right: &PriceRule) -> Ordering {
    left.priority
        .cmp(&right.priority)
        .then_with(|| left.valid_from.cmp(&right.valid_from))
        .then_with(|| left.id.cmp(&right.id))
}
