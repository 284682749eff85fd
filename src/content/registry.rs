//! Catalog resource providing lookups for loaded animals, and the owned subset.

use bevy::prelude::*;
use std::collections::{BTreeSet, HashMap};

use super::data::AnimalDef;

/// Every animal that can be awarded, in load order.
#[derive(Resource, Debug, Clone, Default)]
pub struct Catalog {
    animals: Vec<AnimalDef>,
    index_by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, keeping the first animal for any repeated id.
    pub fn from_animals(animals: impl IntoIterator<Item = AnimalDef>) -> Self {
        let mut catalog = Self::default();
        for animal in animals {
            catalog.insert(animal);
        }
        catalog
    }

    /// Add an animal. Returns false (and drops it) if the id is already taken.
    pub fn insert(&mut self, animal: AnimalDef) -> bool {
        if self.index_by_id.contains_key(&animal.id) {
            return false;
        }
        self.index_by_id
            .insert(animal.id.clone(), self.animals.len());
        self.animals.push(animal);
        true
    }

    pub fn get(&self, id: &str) -> Option<&AnimalDef> {
        self.index_by_id.get(id).map(|&index| &self.animals[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_by_id.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimalDef> {
        self.animals.iter()
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        let mut levels: Vec<u32> = self.animals.iter().map(|animal| animal.level).collect();
        levels.sort_unstable();
        levels.dedup();
        format!(
            "Catalog loaded:\n\
             - Animals: {}\n\
             - Levels: {:?}",
            self.animals.len(),
            levels,
        )
    }
}

/// Ids of the animals a session already owns. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    owned: BTreeSet<String>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.owned.contains(id)
    }

    /// Record an animal as owned. Returns true if it was not owned before.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.owned.insert(id.into())
    }

    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.owned.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Collection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            owned: iter.into_iter().map(Into::into).collect(),
        }
    }
}
