use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::PlannerError;

/// Biological sex used to pick the Harris-Benedict formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = PlannerError;

    /// Case-insensitive; anything but male/female is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(PlannerError::invalid_input("gender must be male or female")),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Activity level as supplied by the caller.
///
/// Unknown spellings are kept verbatim in `Unrecognized` instead of being
/// rejected; they are costed like `Sedentary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    Active,
    VeryActive,
    Unrecognized(String),
}

impl ActivityLevel {
    pub const KNOWN_NAMES: [&'static str; 5] = [
        "sedentary",
        "lightly_active",
        "moderately_active",
        "active",
        "very_active",
    ];

    /// Parse a level name, matching case-insensitively. Never fails.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "lightly_active" => ActivityLevel::LightlyActive,
            "moderately_active" => ActivityLevel::ModeratelyActive,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Unrecognized(s.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weight goal. Only the exact strings "loss" and "gain" adjust the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightGoal {
    Loss,
    #[default]
    Maintain,
    Gain,
}

impl WeightGoal {
    pub const KNOWN_NAMES: [&'static str; 3] = ["loss", "maintain", "gain"];

    /// Case-sensitive; every other value means `Maintain`.
    pub fn parse(s: &str) -> Self {
        match s {
            "loss" => WeightGoal::Loss,
            "gain" => WeightGoal::Gain,
            _ => WeightGoal::Maintain,
        }
    }

    pub fn is_known_name(s: &str) -> bool {
        Self::KNOWN_NAMES.contains(&s)
    }

    /// Like `parse`, but warns when the value falls back to `Maintain`.
    pub fn resolve(s: &str) -> Self {
        if !Self::is_known_name(s) {
            warn!(weight_goal = %s, "unrecognized weight goal, using maintain");
        }
        Self::parse(s)
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightGoal::Loss => write!(f, "loss"),
            WeightGoal::Maintain => write!(f, "maintain"),
            WeightGoal::Gain => write!(f, "gain"),
        }
    }
}

/// Per-request biometric inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct BiometricProfile {
    /// Years.
    pub age: i64,
    /// Kilograms.
    pub weight: f64,
    /// Centimetres.
    pub height: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}
