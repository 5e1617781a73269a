use crate::model::{Ingredient, Spec};

#[cfg(feature = "serde")]
use serde::Serialize;

/// One step of a restock plan: what to buy and which specs it completes.
///
/// `cost` is the sum of the ingredient prices, unpriced ones counting as zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RestockRound {
    pub(crate) ingredients: Vec<Ingredient>,
    pub(crate) specs: Vec<Spec>,
    pub(crate) cost: u64,
}

impl RestockRound {
    /// Creates a round, computing its cost from the ingredient prices.
    pub fn new(ingredients: Vec<Ingredient>, specs: Vec<Spec>) -> Self {
        let cost = ingredients.iter().map(Ingredient::cost).sum();
        Self {
            ingredients,
            specs,
            cost,
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn specs(&self) -> &[Spec] {
        &self.specs
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }

    pub fn spec_names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.name.as_str())
    }
}
