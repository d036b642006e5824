use serde::{Deserialize, Serialize};

use crate::models::MealType;

/// Daily requirement and its per-meal split.
///
/// The `*_calories` fields are the continuous estimates reported back to the
/// caller; the `*_bucket` fields are the rounded values used for lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBudget {
    pub daily_calories: f64,
    pub breakfast_calories: f64,
    pub lunch_calories: f64,
    pub dinner_calories: f64,
    pub breakfast_bucket: i64,
    pub lunch_bucket: i64,
    pub dinner_bucket: i64,
}

impl EnergyBudget {
    pub fn bucket(&self, meal: MealType) -> i64 {
        match meal {
            MealType::Breakfast => self.breakfast_bucket,
            MealType::Lunch => self.lunch_bucket,
            MealType::Dinner => self.dinner_bucket,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieSummary {
    #[serde(rename = "calories-per-day")]
    pub per_day: f64,

    #[serde(rename = "breakfast-calories-per-day")]
    pub breakfast_per_day: f64,

    #[serde(rename = "lunch-calories-per-day")]
    pub lunch_per_day: f64,

    #[serde(rename = "dinner-calories-per-day")]
    pub dinner_per_day: f64,
}

/// Matching meal names for each meal of one diet variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealOptions {
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
}

impl MealOptions {
    pub fn get(&self, meal: MealType) -> &[String] {
        match meal {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }

    pub fn set(&mut self, meal: MealType, names: Vec<String>) {
        match meal {
            MealType::Breakfast => self.breakfast = names,
            MealType::Lunch => self.lunch = names,
            MealType::Dinner => self.dinner = names,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanResponse {
    pub calories: CalorieSummary,
    pub veg: MealOptions,
    pub non_veg: MealOptions,
}
