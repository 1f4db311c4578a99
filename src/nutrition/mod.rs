pub mod calculations;
pub mod catalog;
pub mod constants;

pub use calculations::{bmr, compute_targets, progress_pct, progress_report, surplus, tdee};
pub use catalog::{
    find_food, food_table, foods_in_category, fuzzy_matches, quick_add_foods, FOOD_TABLE,
};
pub use constants::*;
