mod export;
mod ledger;

pub use export::{export_ledger, export_meals_csv};
pub use ledger::MealLedger;
