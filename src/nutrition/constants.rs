// ─────────────────────────────────────────────────────────────────────────────
// Basal metabolic rate
// ─────────────────────────────────────────────────────────────────────────────

/// Linear BMR coefficients: `base + weight*kg + height*cm - age*years`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmrCoefficients {
    pub base: f64,
    pub weight: f64,
    pub height: f64,
    pub age: f64,
}

pub const MALE_BMR: BmrCoefficients = BmrCoefficients {
    base: 88.362,
    weight: 13.397,
    height: 4.799,
    age: 5.677,
};

pub const FEMALE_BMR: BmrCoefficients = BmrCoefficients {
    base: 447.593,
    weight: 9.247,
    height: 3.098,
    age: 4.330,
};

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers (BMR -> TDEE)
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_MULT: f64 = 1.2;
pub const LIGHT_MULT: f64 = 1.375;
pub const MODERATE_MULT: f64 = 1.55;
pub const ACTIVE_MULT: f64 = 1.725;
pub const VERY_ACTIVE_MULT: f64 = 1.9;

// ─────────────────────────────────────────────────────────────────────────────
// Bulking targets
// ─────────────────────────────────────────────────────────────────────────────

/// Calories added on top of TDEE for a moderate bulk.
pub const MODERATE_SURPLUS: f64 = 300.0;

/// Calories added on top of TDEE for an aggressive bulk.
pub const AGGRESSIVE_SURPLUS: f64 = 500.0;

/// Daily protein grams per kilogram of body weight.
pub const PROTEIN_GRAMS_PER_KG: f64 = 2.2;

// ─────────────────────────────────────────────────────────────────────────────
// Meal logging
// ─────────────────────────────────────────────────────────────────────────────

/// Meal names offered by the front end. Any other name is accepted too.
pub const SUGGESTED_MEAL_NAMES: [&str; 6] = [
    "Café da Manhã",
    "Lanche da Manhã",
    "Almoço",
    "Lanche da Tarde",
    "Jantar",
    "Ceia",
];

/// Number of leading reference foods offered as one-step additions.
pub const QUICK_ADD_COUNT: usize = 6;

/// Minimum Jaro–Winkler similarity for a fuzzy food match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum fuzzy candidates shown to the user.
pub const FUZZY_MAX_CANDIDATES: usize = 5;

/// Width of the rendered progress bars, in characters.
pub const PROGRESS_BAR_WIDTH: usize = 30;
