use std::fmt;

use serde::Serialize;

use crate::models::FoodItem;

/// Opaque meal identifier, unique within a ledger's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MealId(u64);

impl MealId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One (food, quantity) pairing within a meal. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct MealLineItem {
    food: &'static FoodItem,
    quantity: f64,
}

impl MealLineItem {
    pub(crate) fn new(food: &'static FoodItem, quantity: f64) -> Self {
        Self { food, quantity }
    }

    pub fn food(&self) -> &'static FoodItem {
        self.food
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// This line's own calories, rounded for display.
    pub fn rounded_calories(&self) -> i64 {
        self.food.calories_for(self.quantity).round() as i64
    }
}

/// A named meal and its line items.
///
/// Totals are derived: they are recomputed from every line item whenever one
/// is added, so rounding never accumulates across additions.
#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    id: MealId,
    name: String,
    line_items: Vec<MealLineItem>,
    total_calories: i64,
    total_protein: i64,
}

impl Meal {
    pub(crate) fn new(id: MealId, name: String) -> Self {
        Self {
            id,
            name,
            line_items: Vec::new(),
            total_calories: 0,
            total_protein: 0,
        }
    }

    pub fn id(&self) -> MealId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line_items(&self) -> &[MealLineItem] {
        &self.line_items
    }

    pub fn total_calories(&self) -> i64 {
        self.total_calories
    }

    /// Total protein in grams.
    pub fn total_protein(&self) -> i64 {
        self.total_protein
    }

    pub(crate) fn push_line_item(&mut self, item: MealLineItem) {
        self.line_items.push(item);
        self.recompute_totals();
    }

    fn recompute_totals(&mut self) {
        let calories: f64 = self
            .line_items
            .iter()
            .map(|item| item.food.calories_for(item.quantity))
            .sum();
        let protein: f64 = self
            .line_items
            .iter()
            .map(|item| item.food.protein_for(item.quantity))
            .sum();

        self.total_calories = calories.round() as i64;
        self.total_protein = protein.round() as i64;
    }
}
