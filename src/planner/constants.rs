use crate::models::{ActivityLevel, MealType};

// ─────────────────────────────────────────────────────────────────────────────
// Harris-Benedict coefficients
// ─────────────────────────────────────────────────────────────────────────────

/// Female BMR: 655.1 + 9.563·weight + 1.850·height − 4.676·age
pub const FEMALE_BMR_BASE: f64 = 655.1;
pub const FEMALE_BMR_WEIGHT: f64 = 9.563;
pub const FEMALE_BMR_HEIGHT: f64 = 1.850;
pub const FEMALE_BMR_AGE: f64 = 4.676;

/// Male BMR: 66.47 + 13.75·weight + 5.003·height − 6.755·age
pub const MALE_BMR_BASE: f64 = 66.47;
pub const MALE_BMR_WEIGHT: f64 = 13.75;
pub const MALE_BMR_HEIGHT: f64 = 5.003;
pub const MALE_BMR_AGE: f64 = 6.755;

// ─────────────────────────────────────────────────────────────────────────────
// Activity and goal adjustments
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_MULT: f64 = 1.2;
pub const LIGHTLY_ACTIVE_MULT: f64 = 1.375;
pub const MODERATELY_ACTIVE_MULT: f64 = 1.55;
pub const ACTIVE_MULT: f64 = 1.725;
pub const VERY_ACTIVE_MULT: f64 = 1.9;

/// Calories removed for "loss" and added for "gain".
pub const GOAL_ADJUSTMENT: f64 = 200.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal split
// ─────────────────────────────────────────────────────────────────────────────

/// Share of the daily budget per meal, in percent. Sums to 88; the rest is
/// left unassigned.
pub const BREAKFAST_PERCENT: f64 = 22.0;
pub const LUNCH_PERCENT: f64 = 31.0;
pub const DINNER_PERCENT: f64 = 35.0;

/// Lookup buckets are multiples of this.
pub const BUCKET_SIZE: f64 = 50.0;

/// Activity multiplier. Unrecognized levels cost the same as sedentary.
pub fn activity_multiplier(level: &ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_MULT,
        ActivityLevel::LightlyActive => LIGHTLY_ACTIVE_MULT,
        ActivityLevel::ModeratelyActive => MODERATELY_ACTIVE_MULT,
        ActivityLevel::Active => ACTIVE_MULT,
        ActivityLevel::VeryActive => VERY_ACTIVE_MULT,
        ActivityLevel::Unrecognized(_) => SEDENTARY_MULT,
    }
}

pub fn meal_percentage(meal: MealType) -> f64 {
    match meal {
        MealType::Breakfast => BREAKFAST_PERCENT,
        MealType::Lunch => LUNCH_PERCENT,
        MealType::Dinner => DINNER_PERCENT,
    }
}
