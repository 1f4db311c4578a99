use clap::Parser;
use tracing::{info, warn};

use bulk_master_rs::cli::{Cli, Command};
use bulk_master_rs::config::resolve_profile;
use bulk_master_rs::error::{BulkError, Result};
use bulk_master_rs::interface::{
    display_food_table, display_meals, display_progress, display_targets, prompt_export_path,
    prompt_food, prompt_meal_name, prompt_profile, prompt_quantity, prompt_select_meal,
    prompt_track_action, prompt_yes_no, TrackAction,
};
use bulk_master_rs::models::UserProfile;
use bulk_master_rs::nutrition::{compute_targets, progress_report};
use bulk_master_rs::state::{export_ledger, MealLedger};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let profile = resolve_profile(cli.profile.as_deref(), &cli.profile_args)?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Targets { json } => cmd_targets(&profile, json),
        Command::Foods => {
            display_food_table();
            Ok(())
        }
        Command::Track => cmd_track(profile),
    }
}

/// Print the targets for a profile.
fn cmd_targets(profile: &UserProfile, json: bool) -> Result<()> {
    let targets = compute_targets(profile);
    info!(
        daily_calories = targets.daily_calories,
        daily_protein = targets.daily_protein,
        "computed targets"
    );

    if json {
        let out = serde_json::json!({
            "profile": profile,
            "targets": targets,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        display_targets(profile, &targets);
    }

    Ok(())
}

/// Interactive meal logging session. Nothing is kept after it ends.
fn cmd_track(mut profile: UserProfile) -> Result<()> {
    let mut ledger = MealLedger::new();
    let mut targets = compute_targets(&profile);

    display_targets(&profile, &targets);

    loop {
        match prompt_track_action()? {
            TrackAction::AddMeal => {
                let name = prompt_meal_name()?;
                if name.is_empty() {
                    println!("Meal name cannot be empty.");
                    continue;
                }
                let meal = ledger.create_meal(name);
                println!("Added {} {}", meal.id(), meal.name());
            }
            TrackAction::AddFood => {
                let Some(meal_id) = prompt_select_meal(ledger.meals(), "Add food to which meal?")?
                else {
                    continue;
                };
                let Some(food) = prompt_food()? else {
                    continue;
                };
                let quantity = prompt_quantity()?;

                match ledger.add_food(meal_id, food, quantity) {
                    Ok(meal) => println!(
                        "{} now at {} kcal, {} g protein",
                        meal.name(),
                        meal.total_calories(),
                        meal.total_protein()
                    ),
                    Err(e @ BulkError::MealNotFound(_)) | Err(e @ BulkError::InvalidInput(_)) => {
                        warn!(error = %e, "could not add food");
                        println!("{}", e);
                    }
                    Err(e) => return Err(e),
                }
            }
            TrackAction::RemoveMeal => {
                let Some(meal_id) = prompt_select_meal(ledger.meals(), "Remove which meal?")?
                else {
                    continue;
                };
                if prompt_yes_no("Remove this meal and all its foods?", false)? {
                    ledger.remove_meal(meal_id);
                    println!("Removed {}", meal_id);
                }
            }
            TrackAction::ShowMeals => display_meals(ledger.meals()),
            TrackAction::ShowProgress => {
                let totals = ledger.daily_totals();
                let report = progress_report(&targets, &totals, ledger.len());
                display_progress(&targets, &totals, &report);
            }
            TrackAction::EditProfile => {
                profile = prompt_profile(&profile)?;
                targets = compute_targets(&profile);
                info!(
                    daily_calories = targets.daily_calories,
                    daily_protein = targets.daily_protein,
                    "profile changed, targets recomputed"
                );
                display_targets(&profile, &targets);
            }
            TrackAction::Export => {
                let path = prompt_export_path()?;
                if export_ledger(&path, &ledger)? {
                    println!("Exported {} meals to {}", ledger.len(), path);
                }
            }
            TrackAction::Quit => {
                if !ledger.is_empty() && !prompt_yes_no("Quit? Logged meals are not saved.", true)? {
                    continue;
                }
                break;
            }
        }
    }

    Ok(())
}
