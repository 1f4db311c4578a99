pub mod food;
pub mod meal;
pub mod profile;
pub mod targets;

pub use food::{FoodCategory, FoodItem};
pub use meal::{Meal, MealId, MealLineItem};
pub use profile::{ActivityLevel, Gender, Goal, UserProfile};
pub use targets::{DailyTargets, DailyTotals, ProgressReport};
