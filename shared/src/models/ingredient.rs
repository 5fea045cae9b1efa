//! Ingredient Model

use serde::{Deserialize, Serialize};

/// Ingredient entity
///
/// All monetary values are integers in the smallest currency unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    /// Unit sale price in minor currency units
    pub sale_price: i64,
}
