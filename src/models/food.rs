use std::fmt;

use serde::Serialize;

/// Display grouping for reference foods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FoodCategory {
    Protein,
    Carbohydrate,
    Fat,
}

impl FoodCategory {
    /// All categories in display order.
    pub const ALL: [FoodCategory; 3] = [
        FoodCategory::Protein,
        FoodCategory::Carbohydrate,
        FoodCategory::Fat,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FoodCategory::Protein => "Protein",
            FoodCategory::Carbohydrate => "Carbohydrate",
            FoodCategory::Fat => "Fat",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A reference food. Values are per serving unit as named (e.g. "100g", "2 unidades").
///
/// Instances only live in the static reference table; meals point at them
/// instead of copying them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    pub name: &'static str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub category: FoodCategory,
}

impl FoodItem {
    /// Calories for `quantity` units, unrounded.
    #[inline]
    pub fn calories_for(&self, quantity: f64) -> f64 {
        self.calories * quantity
    }

    /// Protein grams for `quantity` units, unrounded.
    #[inline]
    pub fn protein_for(&self, quantity: f64) -> f64 {
        self.protein * quantity
    }

    /// Basic validation: all nutrient values non-negative and finite.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fats]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
