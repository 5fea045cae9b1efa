use crate::catalog::InMemoryMenu;
use shared::models::{Dish, DiscountKind, Ingredient, IngredientQuantity, Offer, OfferThreshold};


// ========================================================================
// Helpers: menu construction
// ========================================================================

fn ingredient(id: i64, name: &str, sale_price: i64) -> Ingredient {
    Ingredient {
        id,
        name: name.to_string(),
        sale_price,
    }
}

fn dish(id: i64, name: &str, ingredients: &[(i64, u32)]) -> Dish {
    Dish {
        id,
        name: name.to_string(),
        ingredients: ingredients
            .iter()
            .map(|&(ingredient_id, quantity)| IngredientQuantity {
                ingredient_id,
                quantity,
            })
            .collect(),
    }
}

fn extras(entries: &[(i64, u32)]) -> Vec<IngredientQuantity> {
    entries
        .iter()
        .map(|&(ingredient_id, quantity)| IngredientQuantity {
            ingredient_id,
            quantity,
        })
        .collect()
}

fn threshold(ingredient_id: i64, min_quantity: u32, paid_quantity: u32) -> OfferThreshold {
    OfferThreshold {
        ingredient_id,
        min_quantity,
        paid_quantity,
    }
}

fn percentage_offer(
    id: i64,
    name: &str,
    percent: i64,
    required: Vec<OfferThreshold>,
    excluded: Vec<OfferThreshold>,
) -> Offer {
    Offer {
        id,
        name: name.to_string(),
        required,
        excluded,
        discount_kind: DiscountKind::TotalPercentage,
        discount_amount: percent,
    }
}

fn tiered_offer(id: i64, name: &str, required: Vec<OfferThreshold>) -> Offer {
    Offer {
        id,
        name: name.to_string(),
        required,
        excluded: vec![],
        discount_kind: DiscountKind::IngredientTiered,
        discount_amount: 0,
    }
}

/// Reference menu backing the regression fixtures
///
/// Prices are minor currency units. Dish 1 ("X-Bacon") totals 510 with no
/// eligible offer; dish 2 plus the cheese-heavy extras lands on 230 through
/// the "Festival do queijo" tier.
fn fixture_menu() -> InMemoryMenu {
    InMemoryMenu::new()
        .with_ingredient(ingredient(1, "Alface", 10))
        .with_ingredient(ingredient(2, "Queijo", 50))
        .with_ingredient(ingredient(3, "Ovo", 20))
        .with_ingredient(ingredient(4, "Bacon", 60))
        .with_ingredient(ingredient(5, "Hambúrguer", 400))
        .with_dish(dish(1, "X-Bacon", &[(5, 1), (2, 1), (4, 1)]))
        .with_dish(dish(2, "Misto da casa", &[(2, 1), (4, 1)]))
        .with_offer(percentage_offer(
            1,
            "Light",
            10,
            vec![threshold(1, 1, 0)],
            vec![threshold(4, 1, 0)],
        ))
        .with_offer(tiered_offer(2, "Muita carne", vec![threshold(5, 3, 2)]))
        .with_offer(tiered_offer(
            3,
            "Festival do queijo",
            vec![threshold(2, 3, 1)],
        ))
}
