use bulk_master_rs::error::BulkError;
use bulk_master_rs::models::{DailyTotals, FoodItem};
use bulk_master_rs::nutrition::{find_food, food_table};
use bulk_master_rs::state::MealLedger;

fn food(name: &str) -> &'static FoodItem {
    find_food(name).unwrap()
}

/// Sum meal totals independently of `daily_totals`.
fn summed_totals(ledger: &MealLedger) -> DailyTotals {
    DailyTotals {
        consumed_calories: ledger.meals().iter().map(|m| m.total_calories()).sum(),
        consumed_protein: ledger.meals().iter().map(|m| m.total_protein()).sum(),
    }
}

#[test]
fn test_new_meal_is_empty_with_fresh_id() {
    let mut ledger = MealLedger::new();
    let mut seen = Vec::new();

    for name in ["Café da Manhã", "Almoço", "Almoço", "Jantar"] {
        let meal = ledger.create_meal(name);
        assert_eq!(meal.total_calories(), 0);
        assert_eq!(meal.total_protein(), 0);
        assert!(meal.line_items().is_empty());
        assert!(!seen.contains(&meal.id()));
        seen.push(meal.id());
    }

    let names: Vec<&str> = ledger.meals().iter().map(|m| m.name()).collect();
    assert_eq!(names, ["Café da Manhã", "Almoço", "Almoço", "Jantar"]);
}

#[test]
fn test_eggs_recomputed_not_drifted() {
    let mut ledger = MealLedger::new();
    let breakfast = ledger.create_meal("Café da Manhã").id();
    let eggs = food("Ovos (2 unidades)");

    let meal = ledger.add_food(breakfast, eggs, 2.0).unwrap();
    assert_eq!((meal.total_calories(), meal.total_protein()), (280, 24));

    let meal = ledger.add_food(breakfast, eggs, 1.0).unwrap();
    assert_eq!((meal.total_calories(), meal.total_protein()), (420, 36));

    let items = meal.line_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].quantity(), 2.0);
    assert_eq!(items[1].quantity(), 1.0);
    assert!(std::ptr::eq(items[0].food(), eggs));
}

#[test]
fn test_fractional_quantities_round_on_the_sum() {
    let mut ledger = MealLedger::new();
    let lunch = ledger.create_meal("Almoço").id();
    let rice = food("Arroz Integral (100g cozido)");

    // 2.6 g each: 2.6 -> 3, then 5.2 -> 5, then 7.8 -> 8.
    assert_eq!(ledger.add_food(lunch, rice, 1.0).unwrap().total_protein(), 3);
    assert_eq!(ledger.add_food(lunch, rice, 1.0).unwrap().total_protein(), 5);
    assert_eq!(ledger.add_food(lunch, rice, 1.0).unwrap().total_protein(), 8);
    assert_eq!(ledger.meal(lunch).unwrap().total_calories(), 333);
}

#[test]
fn test_missing_meal_not_found_but_remove_is_noop() {
    let mut ledger = MealLedger::new();
    let dinner = ledger.create_meal("Jantar").id();
    ledger.add_food(dinner, food("Salmão (100g)"), 1.0).unwrap();
    ledger.remove_meal(dinner);

    let err = ledger
        .add_food(dinner, food("Salmão (100g)"), 1.0)
        .unwrap_err();
    assert!(matches!(err, BulkError::MealNotFound(id) if id == dinner));

    ledger.remove_meal(dinner);
    assert!(ledger.is_empty());
    assert_eq!(ledger.daily_totals(), DailyTotals::default());
}

#[test]
fn test_daily_totals_consistent_after_every_mutation() {
    let mut ledger = MealLedger::new();
    let table = food_table();
    let mut ids = Vec::new();

    for (step, item) in table.iter().enumerate() {
        if step % 3 == 0 {
            ids.push(ledger.create_meal(format!("Refeição {}", step)).id());
            assert_eq!(ledger.daily_totals(), summed_totals(&ledger));
        }

        let target = ids[step % ids.len()];
        let quantity = 0.5 + (step as f64) * 0.25;
        ledger.add_food(target, item, quantity).unwrap();
        assert_eq!(ledger.daily_totals(), summed_totals(&ledger));

        if step == 7 {
            let removed = ids.remove(0);
            ledger.remove_meal(removed);
            assert_eq!(ledger.daily_totals(), summed_totals(&ledger));
        }
    }

    assert_eq!(ledger.len(), ids.len());
}

#[test]
fn test_daily_totals_across_meals() {
    let mut ledger = MealLedger::new();
    let breakfast = ledger.create_meal("Café da Manhã").id();
    let snack = ledger.create_meal("Lanche da Tarde").id();

    ledger.add_food(breakfast, food("Aveia (50g)"), 1.0).unwrap();
    ledger.add_food(breakfast, food("Banana (1 média)"), 1.0).unwrap();
    ledger.add_food(snack, food("Whey Protein (30g)"), 2.0).unwrap();

    // breakfast: 190 + 105 = 295 kcal, 6.5 + 1.3 = 7.8 -> 8 g
    // snack: 240 kcal, 48 g
    let totals = ledger.daily_totals();
    assert_eq!(totals.consumed_calories, 535);
    assert_eq!(totals.consumed_protein, 56);

    ledger.remove_meal(snack);
    let totals = ledger.daily_totals();
    assert_eq!(totals.consumed_calories, 295);
    assert_eq!(totals.consumed_protein, 8);
}
