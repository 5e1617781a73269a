use crate::model::Spec;

mod round;
pub use round::RestockRound;


/// Ordered sequence of restock rounds produced by a planner.
///
/// Rounds are meant to be bought in order; each one assumes every earlier
/// round (and every restock-flagged ingredient) has already been acquired.
/// Plans are transient: they are recomputed from a fresh snapshot on demand.
///
/// # Examples
///
/// ```
/// use mixbook::model::{Ingredient, Spec};
/// use mixbook::plan::{RestockPlan, RestockRound};
///
/// let mut plan = RestockPlan::new();
/// plan.push(RestockRound::new(
///     vec![Ingredient::new("Gin").with_price(20)],
///     vec![Spec::new("Martini")],
/// ));
/// plan.push(RestockRound::new(
///     vec![Ingredient::new("Campari").with_price(25)],
///     vec![Spec::new("Negroni")],
/// ));
///
/// assert_eq!(plan.total_cost(), 45);
/// assert_eq!(plan.cumulative_costs(), vec![20, 45]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RestockPlan {
    rounds: Vec<RestockRound>,
}

impl RestockPlan {
    pub fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    pub fn push(&mut self, round: RestockRound) {
        self.rounds.push(round);
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn rounds(&self) -> &[RestockRound] {
        &self.rounds
    }

    pub fn get(&self, index: usize) -> Option<&RestockRound> {
        self.rounds.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RestockRound> {
        self.rounds.iter()
    }

    /// Sum of every round's cost.
    pub fn total_cost(&self) -> u64 {
        self.rounds.iter().map(RestockRound::cost).sum()
    }

    /// Cost of rounds `0..=index`, or `None` past the end.
    pub fn cumulative_cost(&self, index: usize) -> Option<u64> {
        if index >= self.rounds.len() {
            return None;
        }
        Some(self.rounds[..=index].iter().map(RestockRound::cost).sum())
    }

    /// Running total after each round.
    pub fn cumulative_costs(&self) -> Vec<u64> {
        self.rounds
            .iter()
            .scan(0u64, |total, round| {
                *total += round.cost();
                Some(*total)
            })
            .collect()
    }

    /// Names of every ingredient to buy, in purchase order.
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.rounds.iter().flat_map(|r| r.ingredient_names()).collect()
    }

    /// Every spec the plan unlocks, in the order they become possible.
    pub fn unlocked_specs(&self) -> Vec<&Spec> {
        self.rounds.iter().flat_map(|r| r.specs()).collect()
    }
}

impl From<Vec<RestockRound>> for RestockPlan {
    fn from(rounds: Vec<RestockRound>) -> Self {
        Self { rounds }
    }
}

impl IntoIterator for RestockPlan {
    type Item = RestockRound;
    type IntoIter = std::vec::IntoIter<RestockRound>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.into_iter()
    }
}

impl<'a> IntoIterator for &'a RestockPlan {
    type Item = &'a RestockRound;
    type IntoIter = std::slice::Iter<'a, RestockRound>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}
