use dialoguer::{Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, BiometricProfile, Gender, WeightGoal};

/// Profile fields already supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct PartialProfile {
    pub age: Option<i64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub weight_goal: Option<String>,
}

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::invalid_input(format!("Invalid number: {}", input)))
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<i64> {
    let input: String = Input::new()
        .with_prompt("Age (years)")
        .default("30".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::invalid_input(format!("Invalid age: {}", input)))
}

/// Prompt for weight in kilograms.
pub fn prompt_weight() -> Result<f64> {
    prompt_number("Weight (kg)", "70")
}

/// Prompt for height in centimetres.
pub fn prompt_height() -> Result<f64> {
    prompt_number("Height (cm)", "175")
}

pub fn prompt_gender() -> Result<Gender> {
    let options = ["male", "female"];
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        Gender::Male
    } else {
        Gender::Female
    })
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let options = ActivityLevel::KNOWN_NAMES;
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::parse(options[selection]))
}

pub fn prompt_weight_goal() -> Result<WeightGoal> {
    let options = WeightGoal::KNOWN_NAMES;
    let selection = Select::new()
        .with_prompt("Weight goal")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(WeightGoal::parse(options[selection]))
}

/// Fill in whatever the command line left out by prompting for it.
pub fn collect_profile(partial: PartialProfile) -> Result<(BiometricProfile, WeightGoal)> {
    let age = match partial.age {
        Some(age) => age,
        None => prompt_age()?,
    };
    let weight = match partial.weight {
        Some(weight) => weight,
        None => prompt_weight()?,
    };
    let height = match partial.height {
        Some(height) => height,
        None => prompt_height()?,
    };
    let gender = match partial.gender {
        Some(raw) => raw.parse::<Gender>()?,
        None => prompt_gender()?,
    };
    let activity_level = match partial.activity_level {
        Some(raw) => ActivityLevel::parse(&raw),
        None => prompt_activity_level()?,
    };
    let goal = match partial.weight_goal {
        Some(raw) => WeightGoal::resolve(&raw),
        None => prompt_weight_goal()?,
    };

    Ok((
        BiometricProfile {
            age,
            weight,
            height,
            gender,
            activity_level,
        },
        goal,
    ))
}
