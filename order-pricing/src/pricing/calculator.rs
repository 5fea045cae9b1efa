//! Discount Calculator
//!
//! Computes the discount amount one offer contributes to a dish line. All
//! arithmetic is integer (minor currency units) with truncating division.

use shared::models::{DiscountKind, Ingredient, Offer};
use std::collections::HashMap;

/// Calculate the discount an offer contributes
///
/// `undiscounted_total` is the line's ingredient total before any offer;
/// every offer is computed against it, not against a running price. The
/// caller must have resolved every merged ingredient into `ingredients`.
pub fn discount_amount(
    offer: &Offer,
    undiscounted_total: i64,
    quantities: &HashMap<i64, u32>,
    ingredients: &HashMap<i64, Ingredient>,
) -> i64 {
    match offer.discount_kind {
        DiscountKind::TotalPercentage => {
            (undiscounted_total * offer.discount_amount / 100).max(0)
        }
        DiscountKind::IngredientTiered => tiered_discount(offer, quantities, ingredients),
    }
}

/// Tiered discount: every full block of `min_quantity` units is billed as
/// `paid_quantity` units; the remainder below a full block is billed at full
/// price.
fn tiered_discount(
    offer: &Offer,
    quantities: &HashMap<i64, u32>,
    ingredients: &HashMap<i64, Ingredient>,
) -> i64 {
    let mut total = 0i64;

    for threshold in &offer.required {
        let Some(&quantity) = quantities.get(&threshold.ingredient_id) else {
            continue;
        };
        let Some(ingredient) = ingredients.get(&threshold.ingredient_id) else {
            continue;
        };
        if threshold.min_quantity == 0 {
            tracing::warn!(
                offer_id = offer.id,
                ingredient_id = threshold.ingredient_id,
                "tiered threshold with zero min_quantity, skipping"
            );
            continue;
        }

        let quantity = i64::from(quantity);
        let min_quantity = i64::from(threshold.min_quantity);
        let paid_quantity = i64::from(threshold.paid_quantity);
        let price = ingredient.sale_price;

        let blocks = quantity / min_quantity;
        let chargeable = blocks * paid_quantity + quantity % min_quantity;
        let contribution = quantity * price - chargeable * price;

        if contribution < 0 {
            // paid_quantity > min_quantity is malformed catalog data; a
            // negative contribution would claw back earlier discounts.
            tracing::warn!(
                offer_id = offer.id,
                ingredient_id = threshold.ingredient_id,
                contribution,
                "tiered threshold bills more than it waives, ignoring"
            );
            continue;
        }

        total += contribution;
    }

    total
}
