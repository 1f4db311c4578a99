use crate::models::{DailyTargets, DailyTotals, Gender, ProgressReport, UserProfile};
use crate::nutrition::constants::*;

/// Basal metabolic rate in kcal/day, branched on gender.
pub fn bmr(profile: &UserProfile) -> f64 {
    let c = match profile.gender {
        Gender::Male => MALE_BMR,
        Gender::Female => FEMALE_BMR,
    };
    c.base + c.weight * profile.weight_kg + c.height * profile.height_cm
        - c.age * profile.age_years as f64
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn tdee(profile: &UserProfile) -> f64 {
    bmr(profile) * profile.activity_level.multiplier()
}

/// Calorie surplus for the profile's goal.
#[inline]
pub fn surplus(profile: &UserProfile) -> f64 {
    profile.goal.surplus()
}

/// Daily calorie and protein targets for a bulk.
///
/// Pure and total: the profile is assumed to have passed
/// [`UserProfile::validate`]. Protein is a fixed ratio of body weight and
/// ignores activity and goal.
pub fn compute_targets(profile: &UserProfile) -> DailyTargets {
    let daily_calories = (tdee(profile) + surplus(profile)).round() as i64;
    let daily_protein = (profile.weight_kg * PROTEIN_GRAMS_PER_KG).round() as i64;

    DailyTargets {
        daily_calories,
        daily_protein,
    }
}

/// Percent of `target` reached by `consumed`.
///
/// Returns 0.0 for a non-positive target. Not capped at 100.
pub fn progress_pct(consumed: i64, target: i64) -> f64 {
    if target > 0 {
        100.0 * consumed as f64 / target as f64
    } else {
        0.0
    }
}

/// Compare current totals against targets.
pub fn progress_report(
    targets: &DailyTargets,
    totals: &DailyTotals,
    meal_count: usize,
) -> ProgressReport {
    ProgressReport {
        calories_pct: progress_pct(totals.consumed_calories, targets.daily_calories),
        protein_pct: progress_pct(totals.consumed_protein, targets.daily_protein),
        remaining_calories: targets.daily_calories - totals.consumed_calories,
        meal_count,
    }
}
