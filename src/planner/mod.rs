pub mod constants;
pub mod energy;
pub mod matcher;

pub use constants::*;
pub use energy::{
    active_metabolic_rate, apply_weight_goal, basal_metabolic_rate, closest_activity_level,
    estimate,
};
pub use matcher::{bucket_calories, meal_calories, plan_meals, split_budget};
