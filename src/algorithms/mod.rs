pub mod greedy;

pub use greedy::GreedyPlanner;

use std::collections::BTreeSet;

use crate::plan::RestockPlan;
use crate::store::BarSnapshot;

/// Algorithm for planning which ingredients to buy next.
pub trait RestockAlgorithm {
    /// Plans restock rounds over a snapshot.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - Ingredients and specs to plan over; never modified
    /// * `flagged` - Ingredient names treated as already acquired
    ///
    /// # Returns
    ///
    /// A [`RestockPlan`], empty when no spec can be completed.
    fn plan(&self, snapshot: &BarSnapshot, flagged: &BTreeSet<String>) -> RestockPlan;

    /// Plans starting from the snapshot's restock-flagged ingredients.
    fn plan_flagged(&self, snapshot: &BarSnapshot) -> RestockPlan {
        self.plan(snapshot, &snapshot.restock_flagged_names())
    }
}
