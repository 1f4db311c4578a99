pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod state;

pub use error::{BulkError, Result};
pub use models::{FoodItem, Meal, MealId, UserProfile};
pub use nutrition::compute_targets;
pub use state::MealLedger;
