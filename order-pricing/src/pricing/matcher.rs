//! Offer Eligibility Matcher
//!
//! Pure predicates deciding which offers apply to a merged ingredient map.

use shared::models::{Offer, OfferThreshold};
use std::collections::HashMap;

/// Check whether the merged quantities meet a single threshold
fn meets_threshold(threshold: &OfferThreshold, quantities: &HashMap<i64, u32>) -> bool {
    quantities
        .get(&threshold.ingredient_id)
        .is_some_and(|&q| q >= threshold.min_quantity)
}

/// Check whether an offer applies to the merged ingredient quantities
///
/// Exclusion takes precedence: one excluded threshold met disqualifies the
/// offer even when every required threshold is also met. An offer with no
/// required thresholds is vacuously satisfied on the required side.
pub fn offer_applies(offer: &Offer, quantities: &HashMap<i64, u32>) -> bool {
    if offer
        .excluded
        .iter()
        .any(|t| meets_threshold(t, quantities))
    {
        return false;
    }

    offer.required.iter().all(|t| meets_threshold(t, quantities))
}

/// Filter the offer catalog down to the offers applying to these quantities
///
/// The data layer gives no ordering guarantee for the catalog, so eligible
/// offers are returned in ascending id order to keep repeated quotes stable.
pub fn applicable_offers<'a>(
    offers: &'a [Offer],
    quantities: &HashMap<i64, u32>,
) -> Vec<&'a Offer> {
    let mut eligible: Vec<&Offer> = offers
        .iter()
        .filter(|offer| offer_applies(offer, quantities))
        .collect();
    eligible.sort_by_key(|offer| offer.id);
    eligible
}
