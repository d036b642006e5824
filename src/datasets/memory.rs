use std::collections::HashMap;

use tracing::info;

use crate::datasets::MealDatasetProvider;
use crate::error::{PlannerError, Result};
use crate::models::{DietVariant, MealDataset, MealType};

/// Provider holding all six tables in memory.
///
/// Filled once up front and read-only afterwards, so it can be shared across
/// threads behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    tables: HashMap<(MealType, DietVariant), MealDataset>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(mut self, meal: MealType, diet: DietVariant, dataset: MealDataset) -> Self {
        self.tables.insert((meal, diet), dataset);
        self
    }

    /// Load every table from another provider. Fails if any one is unavailable.
    pub fn preload(source: &dyn MealDatasetProvider) -> Result<Self> {
        let mut provider = Self::new();
        for meal in MealType::ALL {
            for diet in DietVariant::ALL {
                let dataset = source.dataset(meal, diet)?;
                info!(%meal, %diet, rows = dataset.len(), "preloaded meal dataset");
                provider.tables.insert((meal, diet), dataset);
            }
        }
        Ok(provider)
    }
}

impl MealDatasetProvider for InMemoryProvider {
    fn dataset(&self, meal: MealType, diet: DietVariant) -> Result<MealDataset> {
        self.tables.get(&(meal, diet)).cloned().ok_or_else(|| {
            PlannerError::dataset_unavailable(format!("{} {}", diet, meal), "not loaded")
        })
    }

    fn lookup(&self, meal: MealType, diet: DietVariant, bucket: i64) -> Result<Vec<String>> {
        self.tables
            .get(&(meal, diet))
            .map(|dataset| dataset.matching(bucket))
            .ok_or_else(|| {
                PlannerError::dataset_unavailable(format!("{} {}", diet, meal), "not loaded")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealRecord;

    #[test]
    fn test_lookup_and_missing_table() {
        let provider = InMemoryProvider::new().with_dataset(
            MealType::Breakfast,
            DietVariant::Veg,
            MealDataset::new(vec![MealRecord {
                meal_name: "Poha".to_string(),
                calories: 450,
            }]),
        );

        assert_eq!(
            provider
                .lookup(MealType::Breakfast, DietVariant::Veg, 450)
                .unwrap(),
            vec!["Poha"]
        );
        assert!(provider
            .lookup(MealType::Breakfast, DietVariant::NonVeg, 450)
            .is_err());
    }
}
