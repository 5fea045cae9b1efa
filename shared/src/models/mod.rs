//! Menu Reference-Data Models
//!
//! Read-only entities the pricing engine consumes:
//! - Ingredient: name and unit sale price
//! - Dish: name and base recipe (ingredient quantities)
//! - Offer: promotional rule with ingredient thresholds and a discount kind

pub mod dish;
pub mod ingredient;
pub mod offer;

// Re-exports
pub use dish::{Dish, IngredientQuantity};
pub use ingredient::Ingredient;
pub use offer::{DiscountKind, Offer, OfferThreshold};
