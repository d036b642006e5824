pub mod meal;
pub mod plan;
pub mod profile;

pub use meal::{DietVariant, MealDataset, MealRecord, MealType};
pub use plan::{CalorieSummary, EnergyBudget, MealOptions, MealPlanResponse};
pub use profile::{ActivityLevel, BiometricProfile, Gender, WeightGoal};
