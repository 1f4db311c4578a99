use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{ActivityLevel, Gender, Goal, UserProfile};

/// BulkMaster: daily calorie and protein targets for a bulk, plus a meal log.
#[derive(Parser, Debug)]
#[command(name = "bulk-master")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a JSON profile file. Flags below override its fields.
    #[arg(short, long, global = true)]
    pub profile: Option<PathBuf>,

    #[command(flatten)]
    pub profile_args: ProfileArgs,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter for the subscriber: warnings only unless `--verbose`.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Individual profile fields, each overriding the file or default value.
#[derive(Args, Debug, Default, Clone)]
pub struct ProfileArgs {
    /// Body weight in kg.
    #[arg(long, global = true)]
    pub weight: Option<f64>,

    /// Height in cm.
    #[arg(long, global = true)]
    pub height: Option<f64>,

    /// Age in years.
    #[arg(long, global = true)]
    pub age: Option<u32>,

    #[arg(long, value_enum, global = true)]
    pub gender: Option<Gender>,

    #[arg(long, value_enum, global = true)]
    pub activity: Option<ActivityLevel>,

    #[arg(long, value_enum, global = true)]
    pub goal: Option<Goal>,
}

impl ProfileArgs {
    /// Overwrite the fields that were given on the command line.
    pub fn apply(&self, profile: &mut UserProfile) {
        if let Some(weight) = self.weight {
            profile.weight_kg = weight;
        }
        if let Some(height) = self.height {
            profile.height_cm = height;
        }
        if let Some(age) = self.age {
            profile.age_years = age;
        }
        if let Some(gender) = self.gender {
            profile.gender = gender;
        }
        if let Some(activity) = self.activity {
            profile.activity_level = activity;
        }
        if let Some(goal) = self.goal {
            profile.goal = goal;
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show daily calorie and protein targets for the profile.
    Targets {
        /// Print targets as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the reference foods by category.
    Foods,

    /// Log meals interactively and track progress against the targets.
    Track,
}

impl Default for Command {
    fn default() -> Self {
        Command::Targets { json: false }
    }
}
