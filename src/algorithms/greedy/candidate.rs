//! Incomplete spec with its computed restock metrics.

use std::collections::BTreeSet;

use crate::model::{Ingredient, Spec};
use crate::plan::RestockRound;
use crate::store::BarSnapshot;

use super::completeness::evaluate;

/// A spec that could be completed by buying its missing ingredients.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub(crate) spec: &'a Spec,
    pub(crate) missing: Vec<&'a Ingredient>,
    pub(crate) cost: u64,
    pub(crate) num_priced: usize,
}

impl<'a> Candidate<'a> {
    /// Evaluates `spec`; `None` if it is unresolvable or already complete.
    pub fn from_spec(
        snapshot: &'a BarSnapshot,
        spec: &'a Spec,
        ignoring: &BTreeSet<String>,
    ) -> Option<Self> {
        let missing = evaluate(snapshot, spec, ignoring).into_candidate()?;
        Some(Self {
            spec,
            missing: missing.ingredients,
            cost: missing.cost,
            num_priced: missing.num_priced,
        })
    }

    pub fn spec(&self) -> &'a Spec {
        self.spec
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn num_priced(&self) -> usize {
        self.num_priced
    }

    /// Missing ingredient names as a set, for exact set comparison.
    pub fn name_set(&self) -> BTreeSet<&'a str> {
        self.missing.iter().map(|i| i.name.as_str()).collect()
    }

    /// Builds a round buying this candidate's missing ingredients for `specs`.
    pub fn to_round(&self, specs: impl IntoIterator<Item = &'a Spec>) -> RestockRound {
        RestockRound::new(
            self.missing.iter().map(|&i| i.clone()).collect(),
            specs.into_iter().cloned().collect(),
        )
    }
}

/// Every candidate of the snapshot, in spec store order.
pub fn collect_candidates<'a>(
    snapshot: &'a BarSnapshot,
    ignoring: &BTreeSet<String>,
) -> Vec<Candidate<'a>> {
    snapshot
        .specs()
        .iter()
        .filter_map(|spec| Candidate::from_spec(snapshot, spec, ignoring))
        .collect()
}
