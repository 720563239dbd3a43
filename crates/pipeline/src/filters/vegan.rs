//! Filter honouring a vegan preference.

use crate::preferences::Preferences;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::FoodItem;

/// Drops non-vegan-friendly items, but only when the user prefers vegan.
pub struct VeganFilter;

impl Filter for VeganFilter {
    fn name(&self) -> &str {
        "VeganFilter"
    }

    fn apply(&self, items: Vec<FoodItem>, preferences: &Preferences) -> Result<Vec<FoodItem>> {
        if !preferences.prefer_vegan {
            return Ok(items);
        }

        Ok(items
            .into_iter()
            .filter(|item| item.is_vegan_friendly)
            .collect())
    }
}
