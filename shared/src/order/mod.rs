//! Order Pricing Types
//!
//! Request and response types for the pricing engine:
//! - `DishOrder`: one requested dish with optional extra ingredients
//! - `PricedDish` / `PricedOrder`: the itemized, discounted result
//! - `AppliedOffer`: receipt trail of offers applied to a line

pub mod applied_offer;
pub mod types;

// Re-exports
pub use applied_offer::AppliedOffer;
pub use types::{DishOrder, IngredientLine, PricedDish, PricedOrder};
