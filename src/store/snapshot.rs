//! Owned stores and the immutable snapshot the planner reads.

use std::collections::{BTreeSet, HashMap};

use super::dex::Dex;
use super::error::StoreError;
use super::inventory::Inventory;
use crate::model::{Ingredient, Spec};

/// Both collections of a bar, owned and mutated by the caller.
#[derive(Debug, Clone, Default)]
pub struct Bar {
    pub inventory: Inventory,
    pub dex: Dex,
}

impl Bar {
    pub fn new(inventory: Inventory, dex: Dex) -> Self {
        Self { inventory, dex }
    }

    /// Renames an ingredient and rewrites every spec line that referenced it.
    ///
    /// Returns the number of spec lines rewritten.
    pub fn rename_ingredient(&mut self, old: &str, new: &str) -> Result<usize, StoreError> {
        self.inventory.rename(old, new)?;
        let new = new.trim();
        let changed = self.dex.rename_ingredient(old, new);
        tracing::debug!(old, new, changed, "renamed ingredient");
        Ok(changed)
    }

    /// Replaces an ingredient, cascading a name change into the specs.
    ///
    /// Returns the number of spec lines rewritten.
    pub fn edit_ingredient(&mut self, name: &str, updated: Ingredient) -> Result<usize, StoreError> {
        let new_name = updated.name.trim().to_string();
        let changed = if new_name == name {
            0
        } else {
            self.rename_ingredient(name, &new_name)?
        };
        self.inventory.edit(&new_name, updated)?;
        Ok(changed)
    }

    /// Clones both collections into a read-only snapshot.
    pub fn snapshot(&self) -> BarSnapshot {
        BarSnapshot::new(
            self.inventory.ingredients().to_vec(),
            self.dex.specs().to_vec(),
        )
    }
}

/// Read-only view of the ingredient and spec collections at one moment.
///
/// Order of both collections is preserved; it decides planner tie-breaks.
/// Name lookup is exact and the first ingredient with a name wins.
#[derive(Debug, Clone, Default)]
pub struct BarSnapshot {
    ingredients: Vec<Ingredient>,
    specs: Vec<Spec>,
    by_name: HashMap<String, usize>,
}

impl BarSnapshot {
    pub fn new(ingredients: Vec<Ingredient>, specs: Vec<Spec>) -> Self {
        let mut by_name = HashMap::with_capacity(ingredients.len());
        for (index, ingredient) in ingredients.iter().enumerate() {
            by_name.entry(ingredient.name.clone()).or_insert(index);
        }
        Self {
            ingredients,
            specs,
            by_name,
        }
    }

    /// Reads the persisted JSON arrays of ingredients and specs.
    #[cfg(feature = "serde")]
    pub fn from_json(ingredients: &str, specs: &str) -> Result<Self, StoreError> {
        let ingredients: Vec<Ingredient> = serde_json::from_str(ingredients)?;
        let specs: Vec<Spec> = serde_json::from_str(specs)?;
        Ok(Self::new(ingredients, specs))
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn specs(&self) -> &[Spec] {
        &self.specs
    }

    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.by_name.get(name).map(|&i| &self.ingredients[i])
    }

    pub fn restock_flagged(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter().filter(|i| i.restock)
    }

    pub fn restock_flagged_names(&self) -> BTreeSet<String> {
        self.restock_flagged().map(|i| i.name.clone()).collect()
    }

    pub fn flagged_cost(&self) -> u64 {
        self.restock_flagged().map(Ingredient::cost).sum()
    }

    /// True when every line resolves to an in-stock ingredient.
    pub fn is_makeable(&self, spec: &Spec) -> bool {
        spec.ingredient_names()
            .all(|name| self.ingredient(name).is_some_and(|i| i.stock))
    }

    pub fn makeable_specs(&self) -> impl Iterator<Item = &Spec> {
        self.specs.iter().filter(|s| self.is_makeable(s))
    }

    pub fn incomplete_specs(&self) -> impl Iterator<Item = &Spec> {
        self.specs.iter().filter(|s| !self.is_makeable(s))
    }

    /// Specs the restock-flagged ingredients would newly make possible.
    ///
    /// A spec qualifies when every line resolves, each ingredient is in stock
    /// or flagged, and at least one flagged ingredient is used.
    pub fn specs_unlocked_by_flagged(&self) -> Vec<&Spec> {
        self.specs
            .iter()
            .filter(|spec| {
                let mut uses_flagged = false;
                for name in spec.ingredient_names() {
                    match self.ingredient(name) {
                        Some(i) if i.restock => uses_flagged = true,
                        Some(i) if i.stock => {}
                        _ => return false,
                    }
                }
                uses_flagged
            })
            .collect()
    }
}
