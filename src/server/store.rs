// src/server/store.rs
//! In-memory recipe collection
//!
//! The store owns every recipe the server knows about. Ids are assigned here
//! at insertion time and never change afterwards; listing preserves insertion
//! order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique recipe identifier
///
/// Rendered as a UUID string in API responses and path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(Uuid);

impl RecipeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecipeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A recipe in the collection
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    /// Ingredient lines, in the order the client submitted them
    pub ingredients: Vec<String>,
}

/// Store errors surfaced to the HTTP layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("recipe {0} not found")]
    NotFound(RecipeId),
}

/// Owns the recipe collection
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new recipe, assigning it a fresh id
    pub fn insert(&mut self, name: String, ingredients: Vec<String>) -> Recipe {
        let recipe = Recipe {
            id: RecipeId::new(),
            name,
            ingredients,
        };
        self.recipes.push(recipe.clone());
        recipe
    }

    /// All recipes in insertion order
    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by id
    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == *id)
    }

    /// Replace a recipe's name and ingredients; the id is immutable
    pub fn update(
        &mut self,
        id: &RecipeId,
        name: String,
        ingredients: Vec<String>,
    ) -> Result<(), StoreError> {
        let recipe = self
            .recipes
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or(StoreError::NotFound(*id))?;

        recipe.name = name;
        recipe.ingredients = ingredients;
        Ok(())
    }

    /// Remove a recipe, returning it
    pub fn remove(&mut self, id: &RecipeId) -> Result<Recipe, StoreError> {
        let pos = self
            .recipes
            .iter()
            .position(|r| r.id == *id)
            .ok_or(StoreError::NotFound(*id))?;

        Ok(self.recipes.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
