pub mod prompts;
pub mod render;

pub use prompts::{
    parse_positive, prompt_export_path, prompt_food, prompt_meal_name, prompt_profile,
    prompt_quantity, prompt_select_meal, prompt_track_action, prompt_yes_no, TrackAction,
};
pub use render::{display_food_table, display_meals, display_progress, display_targets, progress_bar};
