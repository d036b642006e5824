pub mod cli;
pub mod config;
pub mod datasets;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod request;
pub mod server;
pub mod service;

pub use error::{PlannerError, Result};
pub use models::{BiometricProfile, MealPlanResponse, WeightGoal};
pub use service::MealPlanService;
