use strsim::jaro_winkler;

use crate::error::{BulkError, Result};
use crate::models::{FoodCategory, FoodItem};
use crate::nutrition::constants::{FUZZY_MATCH_THRESHOLD, QUICK_ADD_COUNT};

use FoodCategory::{Carbohydrate, Fat, Protein};

const fn food(
    name: &'static str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
    category: FoodCategory,
) -> FoodItem {
    FoodItem {
        name,
        calories,
        protein,
        carbs,
        fats,
        category,
    }
}

/// The fixed bulking food table. Values are per serving as named.
pub static FOOD_TABLE: [FoodItem; 14] = [
    // Proteins
    food("Peito de Frango (100g)", 165.0, 31.0, 0.0, 3.6, Protein),
    food("Ovos (2 unidades)", 140.0, 12.0, 1.0, 10.0, Protein),
    food("Salmão (100g)", 208.0, 20.0, 0.0, 13.0, Protein),
    food("Carne Vermelha Magra (100g)", 250.0, 26.0, 0.0, 15.0, Protein),
    food("Whey Protein (30g)", 120.0, 24.0, 2.0, 1.0, Protein),
    // Carbohydrates
    food("Arroz Integral (100g cozido)", 111.0, 2.6, 23.0, 0.9, Carbohydrate),
    food("Batata Doce (100g)", 86.0, 1.6, 20.0, 0.1, Carbohydrate),
    food("Aveia (50g)", 190.0, 6.5, 32.0, 3.5, Carbohydrate),
    food("Banana (1 média)", 105.0, 1.3, 27.0, 0.4, Carbohydrate),
    food("Pão Integral (2 fatias)", 160.0, 6.0, 28.0, 2.5, Carbohydrate),
    // Healthy fats
    food("Abacate (1/2 unidade)", 160.0, 2.0, 8.5, 15.0, Fat),
    food("Castanhas (30g)", 185.0, 4.5, 3.5, 18.0, Fat),
    food("Azeite (1 colher sopa)", 120.0, 0.0, 0.0, 14.0, Fat),
    food("Amendoim (30g)", 170.0, 7.0, 5.0, 14.0, Fat),
];

/// All reference foods in table order.
pub fn food_table() -> &'static [FoodItem] {
    &FOOD_TABLE
}

/// Foods offered as one-step additions to a meal.
pub fn quick_add_foods() -> &'static [FoodItem] {
    &FOOD_TABLE[..QUICK_ADD_COUNT]
}

/// Get a food by name (case-insensitive).
pub fn find_food(name: &str) -> Result<&'static FoodItem> {
    let key = name.trim().to_lowercase();
    FOOD_TABLE
        .iter()
        .find(|f| f.key() == key)
        .ok_or_else(|| BulkError::FoodNotFound(name.to_string()))
}

/// Foods in one display category, in table order.
pub fn foods_in_category(category: FoodCategory) -> Vec<&'static FoodItem> {
    FOOD_TABLE
        .iter()
        .filter(|f| f.category == category)
        .collect()
}

/// Foods whose names resemble `query`, best match first.
pub fn fuzzy_matches(query: &str, limit: usize) -> Vec<&'static FoodItem> {
    let query = query.trim().to_lowercase();

    let mut candidates: Vec<(&'static FoodItem, f64)> = FOOD_TABLE
        .iter()
        .map(|f| (f, jaro_winkler(&f.key(), &query)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates.into_iter().take(limit).map(|(f, _)| f).collect()
}
