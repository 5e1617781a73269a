//! Spec store.

use std::collections::BTreeSet;

use super::error::StoreError;
use crate::model::Spec;

/// The spec store, kept sorted by name.
#[derive(Debug, Clone, Default)]
pub struct Dex {
    specs: Vec<Spec>,
}

impl Dex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dex from persisted specs, sorting them without validation.
    pub fn from_specs(mut specs: Vec<Spec>) -> Self {
        specs.sort_by(Spec::display_order);
        Self { specs }
    }

    pub fn specs(&self) -> &[Spec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Spec> {
        self.specs.iter().find(|s| s.id == id)
    }

    /// First spec with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<&Spec> {
        self.specs.iter().find(|s| s.name == name)
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.specs
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Validates and stores a new spec. Returns its id.
    pub fn add(&mut self, mut spec: Spec) -> Result<crate::Id, StoreError> {
        spec.trim_strings();
        spec.validate()?;
        let id = spec.id.clone();
        self.specs.push(spec);
        self.specs.sort_by(Spec::display_order);
        Ok(id)
    }

    pub fn delete(&mut self, id: &str) -> Result<Spec, StoreError> {
        let index = self.position(id)?;
        Ok(self.specs.remove(index))
    }

    /// Replaces the contents of spec `id` with `updated`, keeping the id.
    pub fn edit(&mut self, id: &str, updated: &Spec) -> Result<(), StoreError> {
        let index = self.position(id)?;
        let mut candidate = updated.clone();
        candidate.trim_strings();
        candidate.validate()?;
        self.specs[index].copy_from(&candidate);
        self.specs.sort_by(Spec::display_order);
        Ok(())
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, StoreError> {
        let index = self.position(id)?;
        let spec = &mut self.specs[index];
        spec.favorite = !spec.favorite;
        Ok(spec.favorite)
    }

    /// Distinct "Bar, Location" descriptions of specs that name a bar, sorted.
    pub fn bar_names_and_locations(&self) -> Vec<String> {
        self.specs
            .iter()
            .filter(|s| !s.bar_name.is_empty())
            .map(|s| {
                if s.bar_location.is_empty() {
                    s.bar_name.clone()
                } else {
                    format!("{}, {}", s.bar_name, s.bar_location)
                }
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Rewrites every reference to ingredient `old` so it points at `new`.
    ///
    /// Returns how many ingredient lines were changed.
    pub fn rename_ingredient(&mut self, old: &str, new: &str) -> usize {
        let mut changed = 0;
        for line in self.specs.iter_mut().flat_map(|s| s.ingredients.iter_mut()) {
            if line.name == old {
                line.name = new.to_string();
                changed += 1;
            }
        }
        changed
    }
}
