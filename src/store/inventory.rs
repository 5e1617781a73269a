//! Ingredient store.

use std::collections::BTreeSet;

use super::error::StoreError;
use crate::model::{same_name, Ingredient};

/// The ingredient store, kept sorted by name.
///
/// # Invariants
///
/// - No two ingredients share a name, compared case-insensitively
/// - Lookups by name ([`get`](Self::get)) are exact and case-sensitive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    ingredients: Vec<Ingredient>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory from already validated ingredients, sorting them.
    ///
    /// Uniqueness is not re-checked; persisted collections are trusted.
    pub fn from_ingredients(mut ingredients: Vec<Ingredient>) -> Self {
        ingredients.sort();
        Self { ingredients }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Returns the ingredient with exactly this name.
    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.name == name)
    }

    fn position(&self, name: &str) -> Result<usize, StoreError> {
        self.ingredients
            .iter()
            .position(|i| i.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn check_name(&self, candidate: &Ingredient, skip: Option<usize>) -> Result<(), StoreError> {
        if !candidate.has_valid_name() {
            return Err(StoreError::EmptyName);
        }
        let clash = self
            .ingredients
            .iter()
            .enumerate()
            .any(|(i, existing)| Some(i) != skip && same_name(&existing.name, &candidate.name));
        if clash {
            return Err(StoreError::DuplicateName(candidate.name.clone()));
        }
        Ok(())
    }

    /// Adds a new ingredient after trimming its text fields.
    pub fn add(&mut self, mut ingredient: Ingredient) -> Result<(), StoreError> {
        ingredient.trim_strings();
        self.check_name(&ingredient, None)?;
        self.ingredients.push(ingredient);
        self.ingredients.sort();
        Ok(())
    }

    /// Removes the ingredient with this exact name and returns it.
    pub fn delete(&mut self, name: &str) -> Result<Ingredient, StoreError> {
        let index = self.position(name)?;
        Ok(self.ingredients.remove(index))
    }

    /// Replaces the ingredient named `name` with `updated`.
    ///
    /// The name must stay exactly the same, since specs refer to it; use
    /// [`Bar::edit_ingredient`](super::Bar::edit_ingredient) to rename.
    pub fn edit(&mut self, name: &str, mut updated: Ingredient) -> Result<(), StoreError> {
        let index = self.position(name)?;
        updated.trim_strings();
        if updated.name != name {
            return Err(StoreError::NameChanged {
                from: name.to_string(),
                to: updated.name,
            });
        }
        self.ingredients[index] = updated;
        self.ingredients.sort();
        Ok(())
    }

    /// Flips the stock flag and returns the new value.
    pub fn toggle_stock(&mut self, name: &str) -> Result<bool, StoreError> {
        let index = self.position(name)?;
        let ingredient = &mut self.ingredients[index];
        ingredient.stock = !ingredient.stock;
        Ok(ingredient.stock)
    }

    /// Flips the restock flag and returns the new value.
    pub fn toggle_restock(&mut self, name: &str) -> Result<bool, StoreError> {
        let index = self.position(name)?;
        let ingredient = &mut self.ingredients[index];
        ingredient.restock = !ingredient.restock;
        Ok(ingredient.restock)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }

    /// Distinct non-empty suppliers, sorted.
    pub fn suppliers(&self) -> Vec<&str> {
        self.ingredients
            .iter()
            .map(|i| i.supplier.as_str())
            .filter(|s| !s.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Ingredients the user marked for purchase.
    pub fn restock_flagged(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|i| i.restock)
    }

    /// Total price of the restock-flagged ingredients.
    pub fn flagged_cost(&self) -> u64 {
        self.restock_flagged().map(Ingredient::cost).sum()
    }

    /// Renames an ingredient in place. Spec references are not touched here.
    pub(crate) fn rename(&mut self, old: &str, new: &str) -> Result<(), StoreError> {
        let index = self.position(old)?;
        let mut renamed = self.ingredients[index].clone();
        renamed.name = new.to_string();
        renamed.trim_strings();
        self.check_name(&renamed, Some(index))?;
        self.ingredients[index] = renamed;
        self.ingredients.sort();
        Ok(())
    }
}
