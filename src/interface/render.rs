use crate::models::{
    DailyTargets, DailyTotals, FoodCategory, Meal, ProgressReport, UserProfile,
};
use crate::nutrition::calculations::{bmr, surplus, tdee};
use crate::nutrition::catalog::foods_in_category;
use crate::nutrition::constants::PROGRESS_BAR_WIDTH;

/// Render a fixed-width text bar. The fill is capped at 100% even though the
/// percentage itself is not.
pub fn progress_bar(pct: f64, width: usize) -> String {
    let ratio = (pct / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Display the profile and the targets derived from it.
pub fn display_targets(profile: &UserProfile, targets: &DailyTargets) {
    println!();
    println!("=== Daily Targets ===");
    println!();
    println!("Profile: {}", profile);
    println!();
    println!("  BMR:      {:>8.1} kcal", bmr(profile));
    println!(
        "  TDEE:     {:>8.1} kcal (x{})",
        tdee(profile),
        profile.activity_level.multiplier()
    );
    println!("  Surplus:  {:>8.0} kcal", surplus(profile));
    println!();
    println!("Calories per day: {} kcal", targets.daily_calories);
    println!("Protein per day:  {} g", targets.daily_protein);
    println!();
}

/// Display the reference foods grouped by category.
pub fn display_food_table() {
    println!();
    println!("=== Bulking Foods ===");

    for category in FoodCategory::ALL {
        let foods = foods_in_category(category);

        println!();
        println!("--- {} ({} items) ---", category, foods.len());

        let max_name_len = foods.iter().map(|f| f.name.chars().count()).max().unwrap_or(10);

        for food in foods {
            println!(
                "  {:<width$}  {:>4} kcal | P:{:>5}g C:{:>5}g F:{:>5}g",
                food.name,
                food.calories,
                food.protein,
                food.carbs,
                food.fats,
                width = max_name_len
            );
        }
    }

    println!();
}

/// Display every meal with its line items and totals.
pub fn display_meals(meals: &[Meal]) {
    if meals.is_empty() {
        println!("No meals logged yet.");
        return;
    }

    println!();
    println!("=== Meals ===");

    for meal in meals {
        println!();
        println!(
            "{} {} - {} kcal, {} g protein",
            meal.id(),
            meal.name(),
            meal.total_calories(),
            meal.total_protein()
        );

        if meal.line_items().is_empty() {
            println!("    (empty)");
        }

        for item in meal.line_items() {
            println!(
                "    {} x{}  {} kcal",
                item.food().name,
                item.quantity(),
                item.rounded_calories()
            );
        }
    }

    println!();
}

/// Display consumption against the targets.
pub fn display_progress(targets: &DailyTargets, totals: &DailyTotals, report: &ProgressReport) {
    println!();
    println!("=== Daily Progress ===");
    println!();
    println!(
        "Calories {} {:>4} / {} kcal ({:.0}% of target)",
        progress_bar(report.calories_pct, PROGRESS_BAR_WIDTH),
        totals.consumed_calories,
        targets.daily_calories,
        report.calories_pct
    );
    println!(
        "Protein  {} {:>4} / {} g    ({:.0}% of target)",
        progress_bar(report.protein_pct, PROGRESS_BAR_WIDTH),
        totals.consumed_protein,
        targets.daily_protein,
        report.protein_pct
    );
    println!();
    println!("--- Summary ---");
    println!("Consumed:  {} kcal", totals.consumed_calories);
    println!("Remaining: {} kcal", report.remaining_calories);
    println!("Protein:   {} g", totals.consumed_protein);
    println!("Meals:     {}", report.meal_count);
    println!();
}
