#[macro_use]
extern crate assert_float_eq;

use bulk_master_rs::models::{ActivityLevel, DailyTargets, DailyTotals, Gender, Goal, UserProfile};
use bulk_master_rs::nutrition::{bmr, compute_targets, progress_pct, progress_report, tdee};

fn make_profile(
    weight: f64,
    height: f64,
    age: u32,
    gender: Gender,
    activity: ActivityLevel,
    goal: Goal,
) -> UserProfile {
    UserProfile {
        weight_kg: weight,
        height_cm: height,
        age_years: age,
        gender,
        activity_level: activity,
        goal,
    }
}

#[test]
fn test_male_moderate_targets() {
    let profile = make_profile(
        70.0,
        175.0,
        25,
        Gender::Male,
        ActivityLevel::Moderate,
        Goal::Moderate,
    );

    // 88.362 + 937.79 + 839.825 - 141.925
    assert_float_absolute_eq!(bmr(&profile), 1724.052, 1e-9);
    assert_float_absolute_eq!(tdee(&profile), 2672.2806, 1e-9);

    let targets = compute_targets(&profile);
    assert_eq!(targets.daily_calories, 2972);
    assert_eq!(targets.daily_protein, 154);
}

#[test]
fn test_female_aggressive_targets() {
    let profile = make_profile(
        60.0,
        165.0,
        30,
        Gender::Female,
        ActivityLevel::Sedentary,
        Goal::Aggressive,
    );

    assert_float_absolute_eq!(bmr(&profile), 1383.683, 1e-9);

    let targets = compute_targets(&profile);
    assert_eq!(targets.daily_calories, 2160);
    assert_eq!(targets.daily_protein, 132);
}

#[test]
fn test_targets_are_deterministic() {
    let profile = make_profile(
        91.3,
        188.0,
        41,
        Gender::Male,
        ActivityLevel::VeryActive,
        Goal::Aggressive,
    );

    let first = compute_targets(&profile);
    for _ in 0..10 {
        assert_eq!(compute_targets(&profile), first);
    }
}

#[test]
fn test_default_profile_matches_male_example() {
    assert_eq!(
        compute_targets(&UserProfile::default()),
        DailyTargets {
            daily_calories: 2972,
            daily_protein: 154,
        }
    );
}

#[test]
fn test_progress_guards_zero_target() {
    assert_eq!(progress_pct(1200, 0), 0.0);

    let targets = DailyTargets {
        daily_calories: 0,
        daily_protein: 0,
    };
    let totals = DailyTotals {
        consumed_calories: 800,
        consumed_protein: 40,
    };
    let report = progress_report(&targets, &totals, 2);
    assert_eq!(report.calories_pct, 0.0);
    assert_eq!(report.protein_pct, 0.0);
}

#[test]
fn test_progress_unbounded_above_100() {
    let targets = DailyTargets {
        daily_calories: 2160,
        daily_protein: 132,
    };
    let totals = DailyTotals {
        consumed_calories: 3240,
        consumed_protein: 198,
    };
    let report = progress_report(&targets, &totals, 5);
    assert_float_absolute_eq!(report.calories_pct, 150.0, 1e-9);
    assert_float_absolute_eq!(report.protein_pct, 150.0, 1e-9);
    assert_eq!(report.remaining_calories, -1080);
}
