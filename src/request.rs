//! Validation of raw `/generate_meals` request bodies.
//!
//! Numeric fields accept JSON numbers, numeric strings and booleans (as 0/1);
//! `age` truncates fractional JSON numbers toward zero but rejects fractional
//! strings.

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, BiometricProfile, Gender, WeightGoal};

/// A validated planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanRequest {
    pub profile: BiometricProfile,
    pub goal: WeightGoal,
}

impl MealPlanRequest {
    /// Validate a JSON body. Every field is required.
    pub fn from_json(body: &Value) -> Result<Self> {
        let fields = body
            .as_object()
            .ok_or_else(|| PlannerError::invalid_input("request body must be a JSON object"))?;

        let age = parse_age(required(fields, "age")?)?;
        let weight = parse_real("weight", required(fields, "weight")?)?;
        let height = parse_real("height", required(fields, "height")?)?;
        let gender = required_str(fields, "gender")?.parse::<Gender>()?;
        let activity_level = ActivityLevel::parse(required_str(fields, "activity_level")?);

        // Must be present, but null and other non-string values mean "maintain".
        let goal = match fields.get("weight_goal") {
            None => return Err(missing("weight_goal")),
            Some(Value::String(s)) => WeightGoal::resolve(s),
            Some(other) => {
                warn!(weight_goal = %other, "non-string weight goal, using maintain");
                WeightGoal::Maintain
            }
        };

        Ok(Self {
            profile: BiometricProfile {
                age,
                weight,
                height,
                gender,
                activity_level,
            },
            goal,
        })
    }

    /// Parse and validate raw request bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let body: Value = serde_json::from_slice(bytes)
            .map_err(|e| PlannerError::invalid_input(format!("malformed JSON body: {}", e)))?;
        Self::from_json(&body)
    }
}

fn missing(name: &str) -> PlannerError {
    PlannerError::invalid_input(format!("missing required field: {}", name))
}

fn required<'a>(fields: &'a Map<String, Value>, name: &str) -> Result<&'a Value> {
    match fields.get(name) {
        Some(Value::Null) | None => Err(missing(name)),
        Some(value) => Ok(value),
    }
}

fn required_str<'a>(fields: &'a Map<String, Value>, name: &str) -> Result<&'a str> {
    required(fields, name)?
        .as_str()
        .ok_or_else(|| PlannerError::invalid_input(format!("{} must be a string", name)))
}

fn parse_age(value: &Value) -> Result<i64> {
    let malformed = || PlannerError::invalid_input(format!("age must be an integer, got {}", value));
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else {
                let f = n.as_f64().ok_or_else(malformed)?;
                Ok(f.trunc() as i64)
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| malformed()),
        Value::Bool(b) => Ok(i64::from(*b)),
        _ => Err(malformed()),
    }
}

fn parse_real(name: &str, value: &Value) -> Result<f64> {
    let malformed = || PlannerError::invalid_input(format!("{} must be a number, got {}", name, value));
    let parsed = match value {
        Value::Number(n) => n.as_f64().ok_or_else(malformed)?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| malformed())?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return Err(malformed()),
    };
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(malformed())
    }
}
