//! Configuration for the greedy restock planner.

/// How the tie-break scores a candidate ingredient set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UsageCounting {
    /// One point per spec line naming an ingredient of the set. A spec using
    /// two ingredients of the set scores twice.
    #[default]
    PerReference,
    /// One point per spec using any ingredient of the set.
    PerSpec,
}

/// Configuration for [`GreedyPlanner`](super::GreedyPlanner).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Scoring used when several cheapest candidates tie.
    pub usage_counting: UsageCounting,
    /// Stop after this many rounds. `None` plans until nothing is left.
    pub max_rounds: Option<usize>,
}

impl PlannerConfig {
    pub fn with_usage_counting(mut self, counting: UsageCounting) -> Self {
        self.usage_counting = counting;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// True once a plan of `rounds` rounds has reached the configured cap.
    pub fn reached_limit(&self, rounds: usize) -> bool {
        self.max_rounds.is_some_and(|max| rounds >= max)
    }
}
