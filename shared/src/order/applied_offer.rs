//! Applied Offer - tracks which offers were applied to a dish line

use crate::models::{DiscountKind, Offer};
use serde::{Deserialize, Serialize};

/// Applied offer record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppliedOffer {
    // === Offer Identity ===
    pub offer_id: i64,
    pub name: String,

    // === Calculation Info ===
    pub discount_kind: DiscountKind,
    /// Discount amount computed against the line's undiscounted total
    pub amount: i64,
}

impl AppliedOffer {
    /// Create from an Offer with its calculated discount amount
    pub fn from_offer(offer: &Offer, amount: i64) -> Self {
        Self {
            offer_id: offer.id,
            name: offer.name.clone(),
            discount_kind: offer.discount_kind,
            amount,
        }
    }
}
