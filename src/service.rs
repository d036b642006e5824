use std::sync::Arc;

use tracing::debug;

use crate::datasets::MealDatasetProvider;
use crate::error::Result;
use crate::models::{BiometricProfile, MealPlanResponse, WeightGoal};
use crate::planner::{estimate, plan_meals};
use crate::request::MealPlanRequest;

/// Stateless planning handler: estimate the daily requirement, then match
/// meals against the injected dataset provider.
#[derive(Clone)]
pub struct MealPlanService {
    provider: Arc<dyn MealDatasetProvider>,
}

impl MealPlanService {
    pub fn new(provider: Arc<dyn MealDatasetProvider>) -> Self {
        Self { provider }
    }

    pub fn plan(&self, profile: &BiometricProfile, goal: WeightGoal) -> Result<MealPlanResponse> {
        let daily_calories = estimate(profile, goal);
        debug!(
            age = profile.age,
            weight = profile.weight,
            height = profile.height,
            gender = %profile.gender,
            activity_level = %profile.activity_level,
            goal = %goal,
            daily_calories,
            "estimated daily requirement"
        );
        plan_meals(daily_calories, self.provider.as_ref())
    }

    pub fn handle(&self, request: &MealPlanRequest) -> Result<MealPlanResponse> {
        self.plan(&request.profile, request.goal)
    }
}
