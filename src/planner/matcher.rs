use tracing::debug;

use crate::datasets::MealDatasetProvider;
use crate::error::Result;
use crate::models::{
    CalorieSummary, DietVariant, EnergyBudget, MealOptions, MealPlanResponse, MealType,
};
use crate::planner::constants::{meal_percentage, BUCKET_SIZE};

/// Continuous calorie target for one meal.
pub fn meal_calories(daily_calories: f64, meal: MealType) -> f64 {
    daily_calories * (meal_percentage(meal) / 100.0)
}

/// Round a calorie target to the nearest multiple of 50.
///
/// Exact halves go to the even multiple (1125 → 1100, 1175 → 1200).
pub fn bucket_calories(target: f64) -> i64 {
    ((target / BUCKET_SIZE).round_ties_even() * BUCKET_SIZE) as i64
}

/// Split a daily requirement into per-meal targets and lookup buckets.
pub fn split_budget(daily_calories: f64) -> EnergyBudget {
    let breakfast_calories = meal_calories(daily_calories, MealType::Breakfast);
    let lunch_calories = meal_calories(daily_calories, MealType::Lunch);
    let dinner_calories = meal_calories(daily_calories, MealType::Dinner);

    EnergyBudget {
        daily_calories,
        breakfast_calories,
        lunch_calories,
        dinner_calories,
        breakfast_bucket: bucket_calories(breakfast_calories),
        lunch_bucket: bucket_calories(lunch_calories),
        dinner_bucket: bucket_calories(dinner_calories),
    }
}

/// Look up matching meals for every meal type of one diet variant.
fn match_variant(
    budget: &EnergyBudget,
    diet: DietVariant,
    provider: &dyn MealDatasetProvider,
) -> Result<MealOptions> {
    let mut options = MealOptions::default();
    for meal in MealType::ALL {
        let bucket = budget.bucket(meal);
        let names = provider.lookup(meal, diet, bucket)?;
        debug!(%meal, %diet, bucket, matches = names.len(), "meal lookup");
        options.set(meal, names);
    }
    Ok(options)
}

/// Build the full meal plan for a daily requirement.
///
/// All six lookups must succeed; the first failure is returned and no
/// partial plan is produced.
pub fn plan_meals(
    daily_calories: f64,
    provider: &dyn MealDatasetProvider,
) -> Result<MealPlanResponse> {
    let budget = split_budget(daily_calories);

    let veg = match_variant(&budget, DietVariant::Veg, provider)?;
    let non_veg = match_variant(&budget, DietVariant::NonVeg, provider)?;

    Ok(MealPlanResponse {
        calories: CalorieSummary {
            per_day: budget.daily_calories,
            breakfast_per_day: budget.breakfast_calories,
            lunch_per_day: budget.lunch_calories,
            dinner_per_day: budget.dinner_calories,
        },
        veg,
        non_veg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_rounding() {
        assert_eq!(bucket_calories(440.0), 450);
        assert_eq!(bucket_calories(620.0), 600);
        assert_eq!(bucket_calories(700.0), 700);
        assert_eq!(bucket_calories(449.287), 450);
        assert_eq!(bucket_calories(24.0), 0);
    }

    #[test]
    fn test_bucket_ties_round_to_even() {
        assert_eq!(bucket_calories(1125.0), 1100);
        assert_eq!(bucket_calories(1175.0), 1200);
        assert_eq!(bucket_calories(25.0), 0);
        assert_eq!(bucket_calories(75.0), 100);
    }

    #[test]
    fn test_split_budget_2000() {
        let budget = split_budget(2000.0);
        assert!((budget.breakfast_calories - 440.0).abs() < 1e-9);
        assert!((budget.lunch_calories - 620.0).abs() < 1e-9);
        assert!((budget.dinner_calories - 700.0).abs() < 1e-9);
        assert_eq!(budget.breakfast_bucket, 450);
        assert_eq!(budget.lunch_bucket, 600);
        assert_eq!(budget.dinner_bucket, 700);
    }

    #[test]
    fn test_buckets_are_multiples_of_50() {
        for daily in (800..4000).step_by(37) {
            let budget = split_budget(daily as f64);
            for meal in MealType::ALL {
                assert_eq!(budget.bucket(meal) % 50, 0);
            }
        }
    }
}
