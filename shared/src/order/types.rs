//! Order request/response types

use super::AppliedOffer;
use crate::models::IngredientQuantity;
use serde::{Deserialize, Serialize};

/// One requested dish line of an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DishOrder {
    pub dish_id: i64,
    /// Order-time extra ingredients, additive over the dish's base recipe
    #[serde(default)]
    pub ingredients: Vec<IngredientQuantity>,
}

/// One merged ingredient of a priced dish, resolved to its display name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientLine {
    pub name: String,
    pub quantity: u32,
}

/// Priced result for a single dish line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricedDish {
    pub dish_name: String,
    /// Final price after all offer discounts, clamped at zero
    pub sale_price: i64,
    /// Merged ingredient breakdown (base recipe + extras)
    pub ingredients: Vec<IngredientLine>,
    /// Offers that applied to this line, in application order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_offers: Vec<AppliedOffer>,
}

/// Priced result for a whole order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricedOrder {
    /// Sum of all line sale prices
    pub total_price: i64,
    pub dishes: Vec<PricedDish>,
}
