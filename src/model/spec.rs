//! Drink specs and their ingredient lines.

use std::cmp::Ordering;

use super::taxonomy::{CocktailType, Glassware, Ice};
use crate::store::StoreError;
use crate::Id;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One line of a spec: an opaque amount and the referenced ingredient name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecIngredient {
    pub amount: String,
    pub name: String,
}

impl SpecIngredient {
    pub fn new(amount: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            name: name.into(),
        }
    }
}

/// A drink recipe.
///
/// Ingredients are referenced by name; a reference that does not resolve
/// against the inventory makes the spec unplannable until it does.
///
/// Two specs are the same entry when their `id` matches, even if edited.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Spec {
    #[cfg_attr(feature = "serde", serde(default = "crate::generate_id"))]
    pub id: Id,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bar_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bar_location: String,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: CocktailType,
    pub ingredients: Vec<SpecIngredient>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub garnish: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub glassware: Glassware,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ice: Ice,
    #[cfg_attr(feature = "serde", serde(default))]
    pub directions: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub editors_notes: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub favorite: bool,
}

impl Default for Spec {
    fn default() -> Self {
        Self {
            id: crate::generate_id(),
            name: String::new(),
            bar_name: String::new(),
            bar_location: String::new(),
            kind: CocktailType::default(),
            ingredients: Vec::new(),
            garnish: String::new(),
            glassware: Glassware::default(),
            ice: Ice::default(),
            directions: Vec::new(),
            editors_notes: String::new(),
            favorite: false,
        }
    }
}

impl Spec {
    /// Creates an empty spec with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Appends an ingredient line.
    pub fn with_ingredient(mut self, amount: impl Into<String>, name: impl Into<String>) -> Self {
        self.ingredients.push(SpecIngredient::new(amount, name));
        self
    }

    /// Appends a direction step.
    pub fn with_direction(mut self, step: impl Into<String>) -> Self {
        self.directions.push(step.into());
        self
    }

    pub fn with_kind(mut self, kind: CocktailType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_glassware(mut self, glassware: Glassware, ice: Ice) -> Self {
        self.glassware = glassware;
        self.ice = ice;
        self
    }

    pub fn with_bar(mut self, name: impl Into<String>, location: impl Into<String>) -> Self {
        self.bar_name = name.into();
        self.bar_location = location.into();
        self
    }

    /// Names of the referenced ingredients, in recipe order.
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }

    pub fn uses(&self, ingredient: &str) -> bool {
        self.ingredient_names().any(|n| n == ingredient)
    }

    pub fn has_valid_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn has_ingredients(&self) -> bool {
        !self.ingredients.is_empty()
    }

    pub fn has_valid_ingredients(&self) -> bool {
        self.ingredients.iter().all(|i| !i.name.is_empty())
    }

    pub fn has_directions(&self) -> bool {
        !self.directions.is_empty()
    }

    pub fn has_valid_directions(&self) -> bool {
        self.directions.iter().all(|d| !d.is_empty())
    }

    /// Checks the spec is complete enough to store.
    ///
    /// Reports the first problem found, in field order.
    pub fn validate(&self) -> Result<(), StoreError> {
        if !self.has_valid_name() {
            return Err(StoreError::EmptyName);
        }
        if !self.has_ingredients() {
            return Err(StoreError::MissingIngredients);
        }
        if let Some(i) = self.ingredients.iter().position(|i| i.name.is_empty()) {
            return Err(StoreError::InvalidIngredient(i));
        }
        if !self.has_directions() {
            return Err(StoreError::MissingDirections);
        }
        if let Some(i) = self.directions.iter().position(|d| d.is_empty()) {
            return Err(StoreError::InvalidDirection(i));
        }
        Ok(())
    }

    pub fn trim_strings(&mut self) {
        self.name = self.name.trim().to_string();
        self.bar_name = self.bar_name.trim().to_string();
        self.bar_location = self.bar_location.trim().to_string();
        self.garnish = self.garnish.trim().to_string();
        self.editors_notes = self.editors_notes.trim_matches([' ', '\t']).to_string();

        for ingredient in &mut self.ingredients {
            ingredient.amount = ingredient.amount.trim().to_string();
        }
        for direction in &mut self.directions {
            *direction = direction.trim().to_string();
        }
    }

    /// Store order: by name, then by id. Equality stays identity by id.
    pub fn display_order(&self, other: &Spec) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.id.cmp(&other.id))
    }

    /// Copies every field except `id` from `other`.
    pub fn copy_from(&mut self, other: &Spec) {
        let id = std::mem::take(&mut self.id);
        *self = Spec {
            id,
            ..other.clone()
        };
    }
}

impl PartialEq for Spec {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Spec {}
