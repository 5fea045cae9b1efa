//! Order Pricing Engine
//!
//! Orchestrates aggregation, offer matching, and discount calculation per
//! dish line, then sums the clamped line prices into the order total.

use crate::catalog::{CatalogError, MenuSource};
use shared::models::Ingredient;
use shared::order::{AppliedOffer, DishOrder, IngredientLine, PricedDish, PricedOrder};
use std::collections::HashMap;
use thiserror::Error;

use super::aggregate::combine_quantities;
use super::calculator::discount_amount;
use super::matcher::applicable_offers;

/// Pricing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

pub type PricingResult<T> = Result<T, PricingError>;

/// Order pricing engine over a menu reference-data source
///
/// Stateless between calls: the offer catalog is read fresh for every priced
/// line and nothing is cached across requests.
#[derive(Debug, Clone)]
pub struct PricingEngine<S> {
    menu: S,
}

impl<S: MenuSource> PricingEngine<S> {
    pub fn new(menu: S) -> Self {
        Self { menu }
    }

    /// Price a whole order
    ///
    /// Lines are priced independently and returned in request order. A dish
    /// or ingredient that cannot be resolved aborts the whole order; no
    /// partial result is produced.
    pub async fn price_order(&self, orders: &[DishOrder]) -> PricingResult<PricedOrder> {
        let mut dishes = Vec::with_capacity(orders.len());
        for order in orders {
            dishes.push(self.price_dish(order).await?);
        }

        let total_price = dishes.iter().map(|dish| dish.sale_price).sum();
        Ok(PricedOrder { total_price, dishes })
    }

    /// Price a single dish line
    async fn price_dish(&self, order: &DishOrder) -> PricingResult<PricedDish> {
        let dish = self.menu.dish_by_id(order.dish_id).await?;
        let quantities = combine_quantities(&dish.ingredients, &order.ingredients);

        // Resolve every merged ingredient up front, in id order so lookups
        // and the breakdown are reproducible.
        let mut ingredient_ids: Vec<i64> = quantities.keys().copied().collect();
        ingredient_ids.sort_unstable();

        let mut ingredients: HashMap<i64, Ingredient> =
            HashMap::with_capacity(ingredient_ids.len());
        for &id in &ingredient_ids {
            ingredients.insert(id, self.menu.ingredient_by_id(id).await?);
        }

        let undiscounted_total: i64 = quantities
            .iter()
            .map(|(id, &quantity)| ingredients[id].sale_price * i64::from(quantity))
            .sum();

        // Fresh catalog snapshot per line; eligible offers come back in id
        // order (matcher guarantee).
        let offers = self.menu.all_offers().await;
        let eligible = applicable_offers(&offers, &quantities);

        // Every discount is computed against the undiscounted total; the
        // running price is clamped after each offer, not once at the end.
        let mut sale_price = undiscounted_total;
        let mut applied_offers = Vec::with_capacity(eligible.len());
        for offer in eligible {
            let amount = discount_amount(offer, undiscounted_total, &quantities, &ingredients);
            tracing::debug!(
                offer_id = offer.id,
                offer = %offer.name,
                amount,
                "applying offer"
            );
            sale_price = (sale_price - amount).max(0);
            applied_offers.push(AppliedOffer::from_offer(offer, amount));
        }

        let ingredient_lines = ingredient_ids
            .iter()
            .map(|id| IngredientLine {
                name: ingredients[id].name.clone(),
                quantity: quantities[id],
            })
            .collect();

        Ok(PricedDish {
            dish_name: dish.name,
            sale_price,
            ingredients: ingredient_lines,
            applied_offers,
        })
    }
}
