use crate::datasets::MealDatasetProvider;
use crate::error::Result;
use crate::models::{DietVariant, MealPlanResponse, MealType};
use crate::planner::bucket_calories;

/// Format a meal plan as a plain-text table.
pub fn format_meal_plan(plan: &MealPlanResponse) -> String {
    let mut out = String::new();

    out.push_str("=== Daily Energy ===\n");
    out.push_str(&format!("Calories per day: {:.0}\n\n", plan.calories.per_day));

    let targets = [
        (MealType::Breakfast, plan.calories.breakfast_per_day),
        (MealType::Lunch, plan.calories.lunch_per_day),
        (MealType::Dinner, plan.calories.dinner_per_day),
    ];

    for (meal, calories) in targets {
        out.push_str(&format!(
            "--- {} ({:.0} cal, matched at {}) ---\n",
            capitalize(meal.name()),
            calories,
            bucket_calories(calories)
        ));
        for (label, options) in [("Veg", &plan.veg), ("Non-veg", &plan.non_veg)] {
            let names = options.get(meal);
            let listed = if names.is_empty() {
                "(no matches)".to_string()
            } else {
                names.join(", ")
            };
            out.push_str(&format!("  {:<8} {}\n", format!("{}:", label), listed));
        }
        out.push('\n');
    }

    out
}

/// Display a meal plan in a formatted table.
pub fn display_meal_plan(plan: &MealPlanResponse) {
    print!("{}", format_meal_plan(plan));
}

/// Print row counts and calorie buckets for all six datasets.
pub fn display_dataset_summary(provider: &dyn MealDatasetProvider) -> Result<()> {
    println!();
    println!("=== Meal Datasets ===");
    println!();

    for diet in DietVariant::ALL {
        for meal in MealType::ALL {
            let dataset = provider.dataset(meal, diet)?;
            let buckets: Vec<String> = dataset
                .calorie_values()
                .iter()
                .map(|c| c.to_string())
                .collect();
            println!(
                "  {:<8} {:<10} {:>4} rows  calories: {}",
                diet.name(),
                meal.name(),
                dataset.len(),
                if buckets.is_empty() {
                    "(none)".to_string()
                } else {
                    buckets.join(", ")
                }
            );
        }
    }

    println!();
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalorieSummary, MealOptions};

    #[test]
    fn test_format_meal_plan() {
        let plan = MealPlanResponse {
            calories: CalorieSummary {
                per_day: 2000.0,
                breakfast_per_day: 440.0,
                lunch_per_day: 620.0,
                dinner_per_day: 700.0,
            },
            veg: MealOptions {
                breakfast: vec!["Poha".to_string(), "Upma".to_string()],
                ..Default::default()
            },
            non_veg: MealOptions::default(),
        };

        let text = format_meal_plan(&plan);
        assert!(text.contains("Calories per day: 2000"));
        assert!(text.contains("Breakfast (440 cal, matched at 450)"));
        assert!(text.contains("Poha, Upma"));
        assert!(text.contains("(no matches)"));
    }
}
