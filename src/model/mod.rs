//! Bar data model: ingredients, drink specs and their closed taxonomies.

mod ingredient;
mod spec;
pub mod taxonomy;

pub use ingredient::Ingredient;
pub(crate) use ingredient::same_name;
pub use spec::{Spec, SpecIngredient};
pub use taxonomy::{CocktailType, Glassware, Ice, IngredientType};
