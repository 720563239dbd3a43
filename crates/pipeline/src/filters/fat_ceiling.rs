//! Filter enforcing the fixed fat limit.

use crate::preferences::Preferences;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::FoodItem;

/// Grams of fat above which an item is never recommended
pub const MAX_FAT_GRAMS: f64 = 5.0;

/// Keeps items with `fat <= max_fat`.
///
/// The limit does not come from user input.
pub struct FatCeilingFilter {
    max_fat: f64,
}

impl FatCeilingFilter {
    pub fn new(max_fat: f64) -> Self {
        Self { max_fat }
    }
}

impl Default for FatCeilingFilter {
    fn default() -> Self {
        Self::new(MAX_FAT_GRAMS)
    }
}

impl Filter for FatCeilingFilter {
    fn name(&self) -> &str {
        "FatCeilingFilter"
    }

    fn apply(&self, items: Vec<FoodItem>, _preferences: &Preferences) -> Result<Vec<FoodItem>> {
        Ok(items
            .into_iter()
            .filter(|item| item.fat <= self.max_fat)
            .collect())
    }
}
