//! Ingredient Quantity Aggregation
//!
//! Merges a dish's base recipe with order-time extra ingredients into one
//! net quantity per ingredient id.

use shared::models::IngredientQuantity;
use std::collections::HashMap;

/// Combine base recipe quantities with order-time extras
///
/// Quantities are additive: an extra for an ingredient already in the recipe
/// raises its quantity, it never replaces it. The result holds at most one
/// entry per ingredient id; iteration order is unspecified.
pub fn combine_quantities(
    base: &[IngredientQuantity],
    extras: &[IngredientQuantity],
) -> HashMap<i64, u32> {
    let mut merged = HashMap::with_capacity(base.len() + extras.len());

    for item in base {
        *merged.entry(item.ingredient_id).or_insert(0) += item.quantity;
    }

    for item in extras {
        *merged.entry(item.ingredient_id).or_insert(0) += item.quantity;
    }

    merged
}
