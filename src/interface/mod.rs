pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, prompt_activity_level, prompt_age, prompt_gender, prompt_height,
    prompt_weight, prompt_weight_goal, PartialProfile,
};
pub use render::{display_dataset_summary, display_meal_plan, format_meal_plan};
