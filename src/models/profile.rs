use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{BulkError, Result};
use crate::nutrition::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Weekly training volume, mapped to a fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    #[value(name = "very_active")]
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => SEDENTARY_MULT,
            ActivityLevel::Light => LIGHT_MULT,
            ActivityLevel::Moderate => MODERATE_MULT,
            ActivityLevel::Active => ACTIVE_MULT,
            ActivityLevel::VeryActive => VERY_ACTIVE_MULT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light (1-3x/week)",
            ActivityLevel::Moderate => "moderate (3-5x/week)",
            ActivityLevel::Active => "active (6-7x/week)",
            ActivityLevel::VeryActive => "very active (2x/day)",
        }
    }
}

/// How hard to push the calorie surplus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Moderate,
    Aggressive,
}

impl Goal {
    pub const ALL: [Goal; 2] = [Goal::Moderate, Goal::Aggressive];

    pub fn surplus(self) -> f64 {
        match self {
            Goal::Moderate => MODERATE_SURPLUS,
            Goal::Aggressive => AGGRESSIVE_SURPLUS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::Moderate => "moderate (+300 kcal)",
            Goal::Aggressive => "aggressive (+500 kcal)",
        }
    }
}

/// The user's body data and bulking preferences.
///
/// Replaced wholesale on every edit; targets are recomputed from the new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight in kilograms.
    #[serde(rename = "weight")]
    pub weight_kg: f64,

    /// Height in centimeters.
    #[serde(rename = "height")]
    pub height_cm: f64,

    /// Age in whole years.
    #[serde(rename = "age")]
    pub age_years: u32,

    pub gender: Gender,

    pub activity_level: ActivityLevel,

    pub goal: Goal,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 25,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Moderate,
        }
    }
}

impl UserProfile {
    /// Reject non-positive or non-finite measurements.
    ///
    /// Plausibility (e.g. a 300 kg teenager) is not checked.
    pub fn validate(&self) -> Result<()> {
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(BulkError::InvalidInput(format!(
                "weight must be a positive number, got {}",
                self.weight_kg
            )));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(BulkError::InvalidInput(format!(
                "height must be a positive number, got {}",
                self.height_cm
            )));
        }
        if self.age_years == 0 {
            return Err(BulkError::InvalidInput(
                "age must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} kg, {} cm, {} y, {}, {}, goal {}",
            self.weight_kg,
            self.height_cm,
            self.age_years,
            self.gender.label(),
            self.activity_level.label(),
            self.goal.label()
        )
    }
}
