//! Tie-break between equally cheap candidate ingredient sets.

use std::collections::BTreeSet;

use crate::model::Spec;

use super::config::UsageCounting;

/// Usage score of one candidate set across the whole spec store.
pub fn usage_count(specs: &[Spec], set: &BTreeSet<&str>, counting: UsageCounting) -> usize {
    match counting {
        UsageCounting::PerReference => specs
            .iter()
            .flat_map(|spec| spec.ingredient_names())
            .filter(|name| set.contains(name))
            .count(),
        UsageCounting::PerSpec => specs
            .iter()
            .filter(|spec| spec.ingredient_names().any(|name| set.contains(name)))
            .count(),
    }
}

/// Picks the candidate set used most across `specs`.
///
/// Duplicate sets are scored once, in first-seen order. On equal scores the
/// earliest set wins, so the result depends only on the order of
/// `candidate_sets`. Returns `None` if there are no candidate sets.
pub fn most_used_set<'a>(
    specs: &[Spec],
    candidate_sets: &[BTreeSet<&'a str>],
    counting: UsageCounting,
) -> Option<BTreeSet<&'a str>> {
    let mut distinct: Vec<&BTreeSet<&'a str>> = Vec::new();
    for set in candidate_sets {
        if !distinct.contains(&set) {
            distinct.push(set);
        }
    }

    let mut best: Option<(&BTreeSet<&'a str>, usize)> = None;
    for set in distinct {
        let count = usage_count(specs, set, counting);
        tracing::trace!(?set, count, "candidate set usage");
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((set, count));
        }
    }

    best.map(|(set, _)| set.clone())
}
