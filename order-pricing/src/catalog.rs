//! Menu Reference-Data Access
//!
//! The pricing engine consumes reference data through [`MenuSource`] so the
//! storage behind it stays swappable. Lookups may suspend (a database-backed
//! source), but the engine performs no caching or locking of its own.

use async_trait::async_trait;
use shared::models::{Dish, Ingredient, Offer};
use std::collections::HashMap;
use thiserror::Error;

/// Reference-data lookup errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Dish not found: {0}")]
    DishNotFound(i64),

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(i64),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read-only source of menu reference data
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Resolve a dish definition by id
    async fn dish_by_id(&self, id: i64) -> CatalogResult<Dish>;

    /// Resolve an ingredient by id
    async fn ingredient_by_id(&self, id: i64) -> CatalogResult<Ingredient>;

    /// Full offer catalog snapshot; empty when no offers exist
    async fn all_offers(&self) -> Vec<Offer>;
}

/// In-memory menu source
///
/// Backs the test suites and embedders that load the menu up front.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMenu {
    dishes: HashMap<i64, Dish>,
    ingredients: HashMap<i64, Ingredient>,
    offers: Vec<Offer>,
}

impl InMemoryMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.insert(ingredient.id, ingredient);
        self
    }

    pub fn with_dish(mut self, dish: Dish) -> Self {
        self.dishes.insert(dish.id, dish);
        self
    }

    pub fn with_offer(mut self, offer: Offer) -> Self {
        self.offers.push(offer);
        self
    }
}

#[async_trait]
impl MenuSource for InMemoryMenu {
    async fn dish_by_id(&self, id: i64) -> CatalogResult<Dish> {
        self.dishes
            .get(&id)
            .cloned()
            .ok_or(CatalogError::DishNotFound(id))
    }

    async fn ingredient_by_id(&self, id: i64) -> CatalogResult<Ingredient> {
        self.ingredients
            .get(&id)
            .cloned()
            .ok_or(CatalogError::IngredientNotFound(id))
    }

    async fn all_offers(&self) -> Vec<Offer> {
        self.offers.clone()
    }
}
