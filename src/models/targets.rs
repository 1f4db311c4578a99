use serde::Serialize;

/// Daily intake targets derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTargets {
    /// Calories per day (TDEE plus surplus), rounded.
    pub daily_calories: i64,

    /// Protein grams per day, rounded.
    pub daily_protein: i64,
}

/// Intake consumed so far, summed over every current meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DailyTotals {
    pub consumed_calories: i64,
    pub consumed_protein: i64,
}

/// Consumption measured against the targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressReport {
    /// Percent of the calorie target consumed; may exceed 100.
    pub calories_pct: f64,

    /// Percent of the protein target consumed; may exceed 100.
    pub protein_pct: f64,

    /// Target minus consumed; negative once over target.
    pub remaining_calories: i64,

    pub meal_count: usize,
}
