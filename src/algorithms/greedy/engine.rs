//! Round iteration: repeatedly selects rounds until nothing is left to unlock.

use std::collections::BTreeSet;

use crate::plan::RestockPlan;
use crate::store::BarSnapshot;

use super::config::PlannerConfig;
use super::selection::select_round;

/// Plans restock rounds starting from the `flagged` ingredient names.
///
/// Each selected round's ingredients join the acquired set before the next
/// selection, so no ingredient is bought twice and every round completes at
/// least one spec that was a candidate before it. The loop therefore ends
/// within one round per spec.
pub fn plan_rounds(
    snapshot: &BarSnapshot,
    flagged: &BTreeSet<String>,
    config: &PlannerConfig,
) -> RestockPlan {
    let mut ignoring = flagged.clone();
    let mut plan = RestockPlan::new();

    while !config.reached_limit(plan.len()) {
        let Some(round) = select_round(snapshot, &ignoring, config) else {
            break;
        };
        tracing::debug!(
            round = plan.len(),
            cost = round.cost(),
            ingredients = round.ingredients().len(),
            specs = round.specs().len(),
            "selected restock round"
        );
        ignoring.extend(round.ingredient_names().map(str::to_string));
        plan.push(round);
    }

    tracing::debug!(rounds = plan.len(), total_cost = plan.total_cost(), "restock plan complete");
    plan
}
