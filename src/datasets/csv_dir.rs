use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::datasets::MealDatasetProvider;
use crate::error::{PlannerError, Result};
use crate::models::{DietVariant, MealDataset, MealRecord, MealType};

/// File name of the table for a (meal type, diet variant) pair.
///
/// Veg tables are `<meal>.csv`; non-veg tables carry an `nv` prefix.
pub fn dataset_file_name(meal: MealType, diet: DietVariant) -> String {
    match diet {
        DietVariant::Veg => format!("{}.csv", meal.name()),
        DietVariant::NonVeg => format!("nv{}.csv", meal.name()),
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    meal_name: String,
    calories: String,
}

/// Read one dataset file. Any I/O, header or row problem makes the whole
/// dataset unavailable.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<MealDataset> {
    let path = path.as_ref();
    let label = path.display().to_string();

    let file = File::open(path).map_err(|e| PlannerError::dataset_unavailable(&label, e))?;
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        let row = row.map_err(|e| PlannerError::dataset_unavailable(&label, e))?;
        let calories = row.calories.parse::<i64>().map_err(|_| {
            PlannerError::dataset_unavailable(
                &label,
                format!(
                    "calories for {:?} is not an integer: {:?}",
                    row.meal_name, row.calories
                ),
            )
        })?;
        records.push(MealRecord {
            meal_name: row.meal_name,
            calories,
        });
    }

    Ok(MealDataset::new(records))
}

/// Provider backed by a directory of CSV files, re-read on every lookup.
#[derive(Debug, Clone)]
pub struct CsvDirectoryProvider {
    dir: PathBuf,
}

impl CsvDirectoryProvider {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, meal: MealType, diet: DietVariant) -> PathBuf {
        self.dir.join(dataset_file_name(meal, diet))
    }
}

impl MealDatasetProvider for CsvDirectoryProvider {
    fn dataset(&self, meal: MealType, diet: DietVariant) -> Result<MealDataset> {
        load_dataset(self.path_for(meal, diet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            dataset_file_name(MealType::Breakfast, DietVariant::Veg),
            "breakfast.csv"
        );
        assert_eq!(
            dataset_file_name(MealType::Dinner, DietVariant::NonVeg),
            "nvdinner.csv"
        );
    }

    #[test]
    fn test_load_dataset_ignores_extra_columns() {
        let file = write_csv("calories,meal_name,cuisine\n450,Poha,Indian\n 600 , Thali ,Indian\n");
        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].meal_name, "Thali");
        assert_eq!(dataset.records()[1].calories, 600);
    }

    #[test]
    fn test_load_dataset_rejects_fractional_calories() {
        let file = write_csv("meal_name,calories\nPoha,450.5\n");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, PlannerError::DatasetUnavailable { .. }));
    }

    #[test]
    fn test_load_dataset_missing_column() {
        let file = write_csv("name,calories\nPoha,450\n");
        let err = load_dataset(file.path()).unwrap_err();
        assert!(matches!(err, PlannerError::DatasetUnavailable { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let provider = CsvDirectoryProvider::new(dir.path());
        let err = provider
            .lookup(MealType::Lunch, DietVariant::Veg, 600)
            .unwrap_err();
        assert!(matches!(err, PlannerError::DatasetUnavailable { .. }));
    }
}
