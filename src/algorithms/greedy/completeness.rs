//! Completeness evaluation of a single spec.

use std::collections::BTreeSet;

use crate::model::{Ingredient, Spec};
use crate::store::BarSnapshot;

/// What a spec still lacks, given the in-stock and already-acquired ingredients.
#[derive(Debug, Clone, PartialEq)]
pub struct Missing<'a> {
    /// Missing ingredients in recipe order, each listed once.
    pub ingredients: Vec<&'a Ingredient>,
    /// Sum of missing prices; unpriced ingredients add nothing.
    pub cost: u64,
    /// How many missing ingredients carry a price.
    pub num_priced: usize,
}

impl Missing<'_> {
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

/// Outcome of evaluating one spec.
#[derive(Debug, Clone, PartialEq)]
pub enum Completeness<'a> {
    /// A line names an ingredient the inventory does not hold; the spec can
    /// never be completed and is not a candidate.
    Unresolvable { name: &'a str },
    /// Every line resolved. The list may be empty if the spec is makeable.
    Evaluated(Missing<'a>),
}

impl<'a> Completeness<'a> {
    /// The missing set if the spec is a candidate: resolvable and incomplete.
    pub fn into_candidate(self) -> Option<Missing<'a>> {
        match self {
            Completeness::Evaluated(missing) if !missing.is_empty() => Some(missing),
            _ => None,
        }
    }
}

/// Evaluates `spec` against the snapshot's stock plus the `ignoring` names.
///
/// An ingredient is missing when it resolves, is out of stock and its name is
/// not in `ignoring`. Evaluation stops at the first unresolved reference.
pub fn evaluate<'a>(
    snapshot: &'a BarSnapshot,
    spec: &'a Spec,
    ignoring: &BTreeSet<String>,
) -> Completeness<'a> {
    let mut missing = Missing {
        ingredients: Vec::new(),
        cost: 0,
        num_priced: 0,
    };

    for line in &spec.ingredients {
        let Some(ingredient) = snapshot.ingredient(&line.name) else {
            return Completeness::Unresolvable { name: &line.name };
        };
        if ingredient.stock || ignoring.contains(&ingredient.name) {
            continue;
        }
        // same ingredient on two lines
        if missing.ingredients.iter().any(|m| m.name == ingredient.name) {
            continue;
        }
        missing.cost += ingredient.cost();
        if ingredient.is_priced() {
            missing.num_priced += 1;
        }
        missing.ingredients.push(ingredient);
    }

    Completeness::Evaluated(missing)
}
