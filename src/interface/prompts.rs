use dialoguer::{Confirm, Input, Select};

use crate::error::{BulkError, Result};
use crate::models::{ActivityLevel, FoodItem, Gender, Goal, Meal, MealId, UserProfile};
use crate::nutrition::catalog::{food_table, fuzzy_matches, quick_add_foods};
use crate::nutrition::constants::{FUZZY_MAX_CANDIDATES, SUGGESTED_MEAL_NAMES};

/// Actions offered by the interactive tracking loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackAction {
    AddMeal,
    AddFood,
    RemoveMeal,
    ShowMeals,
    ShowProgress,
    EditProfile,
    Export,
    Quit,
}

impl TrackAction {
    pub const ALL: [TrackAction; 8] = [
        TrackAction::AddMeal,
        TrackAction::AddFood,
        TrackAction::RemoveMeal,
        TrackAction::ShowMeals,
        TrackAction::ShowProgress,
        TrackAction::EditProfile,
        TrackAction::Export,
        TrackAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TrackAction::AddMeal => "Add meal",
            TrackAction::AddFood => "Add food to a meal",
            TrackAction::RemoveMeal => "Remove meal",
            TrackAction::ShowMeals => "Show meals",
            TrackAction::ShowProgress => "Show progress",
            TrackAction::EditProfile => "Edit profile",
            TrackAction::Export => "Export meals to CSV",
            TrackAction::Quit => "Quit",
        }
    }
}

/// Parse a strictly positive, finite number.
pub fn parse_positive(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| BulkError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if !(value.is_finite() && value > 0.0) {
        return Err(BulkError::InvalidInput(format!(
            "expected a positive number, got {}",
            value
        )));
    }

    Ok(value)
}

/// Prompt for a positive number, re-asking until the input parses.
fn prompt_positive(prompt: &str, default: f64) -> Result<f64> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;

        match parse_positive(&input) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e),
        }
    }
}

fn prompt_age(default: u32) -> Result<u32> {
    loop {
        let input: String = Input::new()
            .with_prompt("Age (years)")
            .default(default.to_string())
            .interact_text()?;

        match input.trim().parse::<u32>() {
            Ok(age) if age > 0 => return Ok(age),
            _ => println!("Age must be a positive whole number"),
        }
    }
}

/// Select one of `options`, starting on the current value.
fn select_option<T: Copy + PartialEq>(
    prompt: &str,
    options: &[T],
    current: T,
    label: fn(T) -> &'static str,
) -> Result<T> {
    let labels: Vec<&str> = options.iter().map(|o| label(*o)).collect();
    let default = options.iter().position(|o| *o == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

/// Walk through every profile field, defaulting to the current values.
///
/// Returns a new profile; the caller recomputes targets from it.
pub fn prompt_profile(current: &UserProfile) -> Result<UserProfile> {
    let weight_kg = prompt_positive("Weight (kg)", current.weight_kg)?;
    let height_cm = prompt_positive("Height (cm)", current.height_cm)?;
    let age_years = prompt_age(current.age_years)?;
    let gender = select_option("Gender", &Gender::ALL, current.gender, Gender::label)?;
    let activity_level = select_option(
        "Activity level",
        &ActivityLevel::ALL,
        current.activity_level,
        ActivityLevel::label,
    )?;
    let goal = select_option("Bulking goal", &Goal::ALL, current.goal, Goal::label)?;

    Ok(UserProfile {
        weight_kg,
        height_cm,
        age_years,
        gender,
        activity_level,
        goal,
    })
}

/// Pick a meal name from the suggestions, or type a custom one.
pub fn prompt_meal_name() -> Result<String> {
    let mut options: Vec<&str> = SUGGESTED_MEAL_NAMES.to_vec();
    options.push("Other...");

    let selection = Select::new()
        .with_prompt("Which meal?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < SUGGESTED_MEAL_NAMES.len() {
        return Ok(SUGGESTED_MEAL_NAMES[selection].to_string());
    }

    let name: String = Input::new()
        .with_prompt("Meal name")
        .interact_text()?;
    Ok(name.trim().to_string())
}

/// Pick one of the current meals. `None` if there are no meals or the user backs out.
pub fn prompt_select_meal(meals: &[Meal], prompt: &str) -> Result<Option<MealId>> {
    if meals.is_empty() {
        println!("No meals yet. Add a meal first.");
        return Ok(None);
    }

    let mut options: Vec<String> = meals
        .iter()
        .map(|m| format!("{} {} ({} kcal)", m.id(), m.name(), m.total_calories()))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(meals.get(selection).map(Meal::id))
}

/// Search the reference table by name with fuzzy matching.
fn prompt_food_search() -> Result<Option<&'static FoodItem>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Food name (or press Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let candidates = fuzzy_matches(input, FUZZY_MAX_CANDIDATES);

        if candidates.is_empty() {
            println!("No matching food found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let food = candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(food));
            }
            continue;
        }

        let mut options: Vec<&str> = candidates.iter().map(|f| f.name).collect();
        options.push("None of these");

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if let Some(food) = candidates.get(selection) {
            return Ok(Some(*food));
        }
    }
}

/// Pick a food: quick-add list, full table, or a name search.
pub fn prompt_food() -> Result<Option<&'static FoodItem>> {
    let quick = quick_add_foods();

    let mut options: Vec<String> = quick
        .iter()
        .map(|f| format!("+ {} ({} kcal)", f.name, f.calories))
        .collect();
    options.push("All foods...".to_string());
    options.push("Search by name...".to_string());
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Which food?")
        .items(&options)
        .default(0)
        .interact()?;

    match selection {
        i if i < quick.len() => Ok(Some(&quick[i])),
        i if i == quick.len() => {
            let table = food_table();
            let mut names: Vec<String> = table
                .iter()
                .map(|f| format!("{} [{}]", f.name, f.category))
                .collect();
            names.push("Cancel".to_string());
            let pick = Select::new()
                .with_prompt("Which food?")
                .items(&names)
                .default(0)
                .interact()?;
            Ok(table_pick(table, pick))
        }
        i if i == quick.len() + 1 => prompt_food_search(),
        _ => Ok(None),
    }
}

/// Map a selection over `table` plus a trailing "Cancel" entry to a food.
fn table_pick(table: &'static [FoodItem], selection: usize) -> Option<&'static FoodItem> {
    table.get(selection)
}

/// Prompt for how many servings of a food to add.
pub fn prompt_quantity() -> Result<f64> {
    prompt_positive("Quantity (servings)", 1.0)
}

/// Prompt for the next action in the tracking loop.
pub fn prompt_track_action() -> Result<TrackAction> {
    let labels: Vec<&str> = TrackAction::ALL.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(TrackAction::ALL[selection])
}

/// Prompt for the CSV export path.
pub fn prompt_export_path() -> Result<String> {
    let path: String = Input::new()
        .with_prompt("Export to")
        .default("meals.csv".to_string())
        .interact_text()?;
    Ok(path)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive(" 2.5 ").unwrap(), 2.5);
        assert!(matches!(
            parse_positive("abc"),
            Err(BulkError::InvalidInput(_))
        ));
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("-3").is_err());
        assert!(parse_positive("inf").is_err());
    }

    #[test]
    fn test_table_pick_cancel_entry() {
        let table = food_table();
        assert!(std::ptr::eq(table_pick(table, 0).unwrap(), &table[0]));
        assert!(table_pick(table, table.len() - 1).is_some());
        assert!(table_pick(table, table.len()).is_none());
    }

    #[test]
    fn test_track_actions_have_labels() {
        for action in TrackAction::ALL {
            assert!(!action.label().is_empty());
        }
        assert_eq!(TrackAction::ALL.last(), Some(&TrackAction::Quit));
    }
}
