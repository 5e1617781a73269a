//! Greedy restock planner.
//!
//! The planner proposes purchases in rounds. Each round buys the missing
//! ingredients of the cheapest incomplete spec(s), then the next round is
//! computed as if those ingredients were already on the shelf.
//!
//! 1. **Completeness**: a spec is a candidate when every line resolves to an
//!    inventory ingredient and at least one of them is out of stock and not
//!    yet acquired. Unresolved lines drop the spec entirely.
//!
//! 2. **Selection**: candidates are narrowed to the minimum total cost, then
//!    to the maximum number of priced missing ingredients. Unpriced
//!    ingredients are free and do not count as priced.
//!
//! 3. **Tie-break**: when several candidates survive, the missing set used
//!    most across the whole spec store wins. The default scoring counts one
//!    point per matching spec line (see [`UsageCounting`]); equal scores go to
//!    the first set in store order.
//!
//! 4. **Iteration**: the chosen ingredients join the acquired set and
//!    selection repeats until no candidate is left.
//!
//! # Module Structure
//!
//! - `completeness` - Missing-ingredient evaluation of one spec
//! - `candidate` - Incomplete spec with cost metrics
//! - `selection` - Cheapest-round selection
//! - `tie_break` - Most-used set resolution
//! - `engine` - Round iteration loop
//! - `config` - Planner options

mod candidate;
mod completeness;
mod config;
mod engine;
mod selection;
mod tie_break;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use crate::plan::{RestockPlan, RestockRound};
use crate::store::BarSnapshot;

pub use config::{PlannerConfig, UsageCounting};
use engine::plan_rounds;
use selection::select_round;

/// Greedy, cost-first restock planner.
#[derive(Debug, Clone, Default)]
pub struct GreedyPlanner {
    config: PlannerConfig,
}

impl GreedyPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Selects the single next round after acquiring `ignoring`.
    pub fn next_round(
        &self,
        snapshot: &BarSnapshot,
        ignoring: &BTreeSet<String>,
    ) -> Option<RestockRound> {
        select_round(snapshot, ignoring, &self.config)
    }
}

impl crate::algorithms::RestockAlgorithm for GreedyPlanner {
    fn plan(&self, snapshot: &BarSnapshot, flagged: &BTreeSet<String>) -> RestockPlan {
        plan_rounds(snapshot, flagged, &self.config)
    }
}
