use strsim::jaro_winkler;
use tracing::warn;

use crate::models::{ActivityLevel, BiometricProfile, Gender, WeightGoal};
use crate::planner::constants::*;

/// Basal metabolic rate from the Harris-Benedict equations.
pub fn basal_metabolic_rate(profile: &BiometricProfile) -> f64 {
    let age = profile.age as f64;
    match profile.gender {
        Gender::Female => {
            FEMALE_BMR_BASE + FEMALE_BMR_WEIGHT * profile.weight + FEMALE_BMR_HEIGHT * profile.height
                - FEMALE_BMR_AGE * age
        }
        Gender::Male => {
            MALE_BMR_BASE + MALE_BMR_WEIGHT * profile.weight + MALE_BMR_HEIGHT * profile.height
                - MALE_BMR_AGE * age
        }
    }
}

/// Activity-adjusted metabolic rate (BMR × activity multiplier), before any
/// weight goal is applied.
pub fn active_metabolic_rate(profile: &BiometricProfile) -> f64 {
    if let ActivityLevel::Unrecognized(raw) = &profile.activity_level {
        match closest_activity_level(raw) {
            Some(suggestion) => warn!(
                activity_level = %raw,
                "unrecognized activity level, using sedentary multiplier (did you mean {}?)",
                suggestion
            ),
            None => warn!(
                activity_level = %raw,
                "unrecognized activity level, using sedentary multiplier"
            ),
        }
    }
    basal_metabolic_rate(profile) * activity_multiplier(&profile.activity_level)
}

/// Shift a daily requirement by the weight goal.
pub fn apply_weight_goal(calories: f64, goal: WeightGoal) -> f64 {
    match goal {
        WeightGoal::Loss => calories - GOAL_ADJUSTMENT,
        WeightGoal::Gain => calories + GOAL_ADJUSTMENT,
        WeightGoal::Maintain => calories,
    }
}

/// Daily calorie requirement for a profile and goal.
pub fn estimate(profile: &BiometricProfile, goal: WeightGoal) -> f64 {
    apply_weight_goal(active_metabolic_rate(profile), goal)
}

/// Nearest known activity level name to a misspelled one, if any is close.
pub fn closest_activity_level(raw: &str) -> Option<&'static str> {
    let raw = raw.to_lowercase();
    ActivityLevel::KNOWN_NAMES
        .into_iter()
        .map(|name| (name, jaro_winkler(&raw, name)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
}

/// Minimum Jaro-Winkler similarity for a suggestion to be offered.
const SUGGESTION_THRESHOLD: f64 = 0.8;
