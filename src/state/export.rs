use std::path::Path;

use tracing::warn;

use crate::error::{BulkError, Result};
use crate::models::Meal;
use crate::state::MealLedger;

/// Write the day's meals to a CSV report, one row per line item.
///
/// Meals without line items still get a row so they show up in the report.
/// Write-only: nothing reads this file back.
pub fn export_meals_csv<P: AsRef<Path>>(path: P, meals: &[Meal]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "meal_id",
        "meal_name",
        "food",
        "quantity",
        "calories",
        "protein_g",
        "meal_total_calories",
        "meal_total_protein_g",
    ])?;

    for meal in meals {
        let id = meal.id().as_u64().to_string();
        let meal_calories = meal.total_calories().to_string();
        let meal_protein = meal.total_protein().to_string();

        if meal.line_items().is_empty() {
            wtr.write_record([
                id.as_str(),
                meal.name(),
                "",
                "",
                "0",
                "0",
                meal_calories.as_str(),
                meal_protein.as_str(),
            ])?;
            continue;
        }

        for item in meal.line_items() {
            let food = item.food();
            wtr.write_record([
                id.clone(),
                meal.name().to_string(),
                food.name.to_string(),
                format!("{}", item.quantity()),
                item.rounded_calories().to_string(),
                format!("{:.1}", food.protein_for(item.quantity())),
                meal_calories.clone(),
                meal_protein.clone(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Export the ledger's meals, treating a failed write as recoverable.
///
/// Returns `Ok(false)` after reporting an I/O or CSV failure so an
/// interactive session can keep its unsaved meals. Other errors propagate.
pub fn export_ledger<P: AsRef<Path>>(path: P, ledger: &MealLedger) -> Result<bool> {
    let path = path.as_ref();

    match export_meals_csv(path, ledger.meals()) {
        Ok(()) => Ok(true),
        Err(e @ (BulkError::Csv(_) | BulkError::Io(_))) => {
            warn!(path = %path.display(), error = %e, "export failed");
            println!("Could not export to {}: {}", path.display(), e);
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::find_food;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_rows() {
        let mut ledger = MealLedger::new();
        let lunch = ledger.create_meal("Almoço").id();
        ledger
            .add_food(lunch, find_food("Peito de Frango (100g)").unwrap(), 2.0)
            .unwrap();
        ledger
            .add_food(lunch, find_food("Batata Doce (100g)").unwrap(), 1.5)
            .unwrap();
        ledger.create_meal("Ceia");

        let file = NamedTempFile::new().unwrap();
        export_meals_csv(file.path(), ledger.meals()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);

        assert_eq!(&rows[0][1], "Almoço");
        assert_eq!(&rows[0][2], "Peito de Frango (100g)");
        assert_eq!(&rows[0][4], "330");
        assert_eq!(&rows[1][3], "1.5");
        assert_eq!(&rows[1][4], "129");
        // 330 + 129 = 459
        assert_eq!(&rows[1][6], "459");

        assert_eq!(&rows[2][1], "Ceia");
        assert_eq!(&rows[2][2], "");
    }

    #[test]
    fn test_failed_export_keeps_ledger() {
        let mut ledger = MealLedger::new();
        let dinner = ledger.create_meal("Jantar").id();
        ledger
            .add_food(dinner, find_food("Salmão (100g)").unwrap(), 1.0)
            .unwrap();
        let before = ledger.daily_totals();

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_dir").join("meals.csv");

        assert!(matches!(
            export_meals_csv(&missing, ledger.meals()),
            Err(BulkError::Csv(_))
        ));
        assert!(!export_ledger(&missing, &ledger).unwrap());

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.daily_totals(), before);
        assert_eq!(ledger.meal(dinner).unwrap().total_calories(), 208);

        let ok_path = dir.path().join("meals.csv");
        assert!(export_ledger(&ok_path, &ledger).unwrap());
        assert!(ok_path.exists());
    }
}
