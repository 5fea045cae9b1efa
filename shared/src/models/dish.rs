//! Dish Model

use serde::{Deserialize, Serialize};

/// One ingredient line of a dish recipe or an order-time addition
///
/// Quantities from multiple sources with the same `ingredient_id` are summed
/// when merged, never overwritten.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientQuantity {
    pub ingredient_id: i64,
    pub quantity: u32,
}

/// Dish entity
///
/// Immutable snapshot read per pricing request; the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dish {
    pub id: i64,
    pub name: String,
    /// Base recipe: ingredient quantities before order-time additions
    pub ingredients: Vec<IngredientQuantity>,
}
