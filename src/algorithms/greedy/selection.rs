//! Selection of the next restock round.

use std::collections::BTreeSet;

use crate::plan::RestockRound;
use crate::store::BarSnapshot;

use super::candidate::{collect_candidates, Candidate};
use super::config::PlannerConfig;
use super::tie_break::most_used_set;

/// Keeps the candidates with exactly the minimum cost.
pub fn retain_cheapest(candidates: &mut Vec<Candidate<'_>>) {
    if let Some(min) = candidates.iter().map(Candidate::cost).min() {
        candidates.retain(|c| c.cost() == min);
    }
}

/// Keeps the candidates with the most priced missing ingredients.
pub fn retain_most_priced(candidates: &mut Vec<Candidate<'_>>) {
    if let Some(max) = candidates.iter().map(Candidate::num_priced).max() {
        candidates.retain(|c| c.num_priced() == max);
    }
}

/// Finds the next round given everything already acquired or flagged.
///
/// 1. Candidates are the specs still incomplete after `ignoring` is bought
/// 2. Only the cheapest survive, then only those with the most priced items
/// 3. A single survivor becomes the round on its own
/// 4. Otherwise the most used missing set wins and the round lists every
///    survivor whose missing set equals it exactly
///
/// Returns `None` once no spec can be completed any further.
pub fn select_round(
    snapshot: &BarSnapshot,
    ignoring: &BTreeSet<String>,
    config: &PlannerConfig,
) -> Option<RestockRound> {
    let mut candidates = collect_candidates(snapshot, ignoring);
    tracing::debug!(candidates = candidates.len(), ignoring = ignoring.len(), "evaluated specs");

    retain_cheapest(&mut candidates);
    retain_most_priced(&mut candidates);

    match candidates.as_slice() {
        [] => None,
        [only] => Some(only.to_round([only.spec()])),
        tied => {
            let sets: Vec<BTreeSet<&str>> = tied.iter().map(Candidate::name_set).collect();
            let winner = most_used_set(snapshot.specs(), &sets, config.usage_counting)?;
            tracing::debug!(tied = tied.len(), ?winner, "resolved tie");

            let mut matching = tied.iter().filter(|c| c.name_set() == winner);
            let first = matching.next()?;
            let specs = std::iter::once(first.spec()).chain(matching.map(Candidate::spec));
            Some(first.to_round(specs))
        }
    }
}
