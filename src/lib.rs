//! mixbook - cocktail specs, bar inventory and restock planning
//!
//! Keeps an ingredient inventory and a collection of drink specs that
//! reference ingredients by name, and plans which ingredients to buy next to
//! unlock the most specs for the least money.

pub mod algorithms;
pub mod model;
pub mod plan;
pub mod store;

pub use algorithms::{GreedyPlanner, RestockAlgorithm};
pub use plan::{RestockPlan, RestockRound};
pub use store::{Bar, BarSnapshot};

/// Identifier type used for specs.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
