use tracing::debug;

use crate::error::{BulkError, Result};
use crate::models::{DailyTotals, FoodItem, Meal, MealId, MealLineItem};

/// Owns the day's meals and keeps their derived totals consistent.
///
/// Meals are only mutated through these methods; callers get shared
/// references back. Totals are read on demand, so they always reflect the
/// current meal set.
#[derive(Debug, Default)]
pub struct MealLedger {
    /// Meals in creation order.
    meals: Vec<Meal>,
    /// Next id to hand out. Ids are never reused, even after removal.
    next_id: u64,
}

impl MealLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty meal. Duplicate names are allowed.
    pub fn create_meal(&mut self, name: impl Into<String>) -> &Meal {
        self.next_id += 1;
        let id = MealId::new(self.next_id);
        let meal = Meal::new(id, name.into());
        debug!(meal_id = %id, name = meal.name(), "created meal");

        self.meals.push(meal);
        &self.meals[self.meals.len() - 1]
    }

    /// Add `quantity` units of `food` to a meal and recompute its totals.
    ///
    /// Fails with [`BulkError::MealNotFound`] for an unknown or removed id,
    /// and with [`BulkError::InvalidInput`] for a non-positive quantity.
    pub fn add_food(
        &mut self,
        meal_id: MealId,
        food: &'static FoodItem,
        quantity: f64,
    ) -> Result<&Meal> {
        let meal = self
            .meals
            .iter_mut()
            .find(|m| m.id() == meal_id)
            .ok_or(BulkError::MealNotFound(meal_id))?;

        if !(quantity.is_finite() && quantity > 0.0) {
            return Err(BulkError::InvalidInput(format!(
                "quantity must be a positive number, got {}",
                quantity
            )));
        }

        meal.push_line_item(MealLineItem::new(food, quantity));
        debug!(
            meal_id = %meal_id,
            food = food.name,
            quantity,
            total_calories = meal.total_calories(),
            total_protein = meal.total_protein(),
            "added food to meal"
        );

        Ok(&*meal)
    }

    /// Remove a meal. Unknown ids are ignored.
    pub fn remove_meal(&mut self, meal_id: MealId) {
        let before = self.meals.len();
        self.meals.retain(|m| m.id() != meal_id);

        if self.meals.len() < before {
            debug!(meal_id = %meal_id, "removed meal");
        } else {
            debug!(meal_id = %meal_id, "remove ignored, no such meal");
        }
    }

    /// Sum of every current meal's totals.
    pub fn daily_totals(&self) -> DailyTotals {
        self.meals.iter().fold(DailyTotals::default(), |acc, m| DailyTotals {
            consumed_calories: acc.consumed_calories + m.total_calories(),
            consumed_protein: acc.consumed_protein + m.total_protein(),
        })
    }

    /// Get a meal by id.
    pub fn meal(&self, meal_id: MealId) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id() == meal_id)
    }

    /// All meals in creation order.
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Count of meals in the ledger.
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Check if the ledger has no meals.
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
