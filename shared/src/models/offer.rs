//! Offer Model

use serde::{Deserialize, Serialize};

/// Discount kind enum
///
/// Dispatch is a plain pattern match in the calculator; adding a kind means
/// adding a variant here and an arm there.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    /// Percentage taken off the dish's undiscounted ingredient total
    TotalPercentage,
    /// Per-ingredient block pricing: every full block of `min_quantity` units
    /// is billed as `paid_quantity` units
    IngredientTiered,
}

/// Per-ingredient rule on an offer
///
/// In a `required` list the threshold must be met for the offer to apply; in
/// an `excluded` list meeting it disqualifies the offer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfferThreshold {
    pub ingredient_id: i64,
    /// Quantity that triggers the rule
    pub min_quantity: u32,
    /// Units billed per full `min_quantity` block (tiered offers only)
    #[serde(default)]
    pub paid_quantity: u32,
}

/// Offer entity (promotional rule)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Offer {
    pub id: i64,
    pub name: String,
    /// All of these must be satisfied by the merged ingredient quantities
    pub required: Vec<OfferThreshold>,
    /// None of these may be satisfied
    pub excluded: Vec<OfferThreshold>,
    pub discount_kind: DiscountKind,
    /// Percentage points for `TotalPercentage`; unused for `IngredientTiered`
    /// (tier pricing comes from each threshold's `paid_quantity`)
    #[serde(default)]
    pub discount_amount: i64,
}
