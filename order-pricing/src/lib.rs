//! Order Pricing Engine
//!
//! This crate implements the pricing and promotional-discount core of the
//! ordering backend:
//!
//! - **catalog**: read-only access to menu reference data (dishes,
//!   ingredients, offer catalog), behind the [`MenuSource`] trait
//! - **pricing**: quantity aggregation, offer eligibility matching, discount
//!   calculation, and the per-order pricing engine
//!
//! # Data Flow
//!
//! ```text
//! DishOrder (dish id + extras)
//!       │
//!       ▼
//! aggregate ──► merged ingredient quantities
//!       │
//!       ▼
//! matcher ────► eligible offers (id order, catalog read fresh per call)
//!       │
//!       ▼
//! calculator ─► one discount per offer, against the undiscounted total
//!       │
//!       ▼
//! engine ─────► clamped sequential deduction ──► PricedOrder
//! ```
//!
//! The engine is a pure computation over immutable inputs: no caching, no
//! locking, no partial results. A dish or ingredient that cannot be resolved
//! aborts the whole order.

pub mod catalog;
pub mod pricing;

// Re-exports
pub use catalog::{CatalogError, CatalogResult, InMemoryMenu, MenuSource};
pub use pricing::{PricingEngine, PricingError, PricingResult};

// Re-export shared types for convenience
pub use shared::models::{Dish, DiscountKind, Ingredient, IngredientQuantity, Offer, OfferThreshold};
pub use shared::order::{AppliedOffer, DishOrder, IngredientLine, PricedDish, PricedOrder};
