use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn name(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietVariant {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl DietVariant {
    pub const ALL: [DietVariant; 2] = [DietVariant::Veg, DietVariant::NonVeg];

    pub fn name(self) -> &'static str {
        match self {
            DietVariant::Veg => "veg",
            DietVariant::NonVeg => "non-veg",
        }
    }
}

impl fmt::Display for DietVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of a meal dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
    pub meal_name: String,
    pub calories: i64,
}

/// Rows of a single (meal type, diet variant) table, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealDataset {
    records: Vec<MealRecord>,
}

impl MealDataset {
    pub fn new(records: Vec<MealRecord>) -> Self {
        Self { records }
    }

    /// Names of every meal whose calories equal `bucket` exactly, in row order.
    pub fn matching(&self, bucket: i64) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.calories == bucket)
            .map(|r| r.meal_name.clone())
            .collect()
    }

    /// Distinct calorie values present, ascending.
    pub fn calorie_values(&self) -> Vec<i64> {
        let mut values: Vec<i64> = self.records.iter().map(|r| r.calories).collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    pub fn records(&self) -> &[MealRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
