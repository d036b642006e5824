mod csv_dir;
mod memory;

pub use csv_dir::{dataset_file_name, load_dataset, CsvDirectoryProvider};
pub use memory::InMemoryProvider;

use crate::error::Result;
use crate::models::{DietVariant, MealDataset, MealType};

/// Source of the six read-only meal tables.
///
/// Implementations must be safe to call from several requests at once.
pub trait MealDatasetProvider: Send + Sync {
    /// The full table for a (meal type, diet variant) pair.
    fn dataset(&self, meal: MealType, diet: DietVariant) -> Result<MealDataset>;

    /// Names of meals whose calories equal `bucket` exactly, in table order.
    /// An empty result is not an error.
    fn lookup(&self, meal: MealType, diet: DietVariant, bucket: i64) -> Result<Vec<String>> {
        Ok(self.dataset(meal, diet)?.matching(bucket))
    }
}
