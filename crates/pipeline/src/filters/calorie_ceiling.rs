//! Filter removing items above the user's calorie ceiling.

use crate::preferences::Preferences;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::FoodItem;

/// Keeps items with `calories <= preferences.max_calories`.
pub struct CalorieCeilingFilter;

impl Filter for CalorieCeilingFilter {
    fn name(&self) -> &str {
        "CalorieCeilingFilter"
    }

    fn apply(&self, items: Vec<FoodItem>, preferences: &Preferences) -> Result<Vec<FoodItem>> {
        Ok(items
            .into_iter()
            .filter(|item| item.calories <= preferences.max_calories)
            .collect())
    }
}
