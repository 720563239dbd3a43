//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable hard
//! constraints to be applied to a scored dataset.

use crate::preferences::Preferences;
use anyhow::Result;
use data_loader::FoodItem;

/// A hard constraint over food items.
///
/// Filters take ownership of the items and return the ones that pass, so
/// chaining them never clones.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Keep only the items satisfying this constraint.
    fn apply(&self, items: Vec<FoodItem>, preferences: &Preferences) -> Result<Vec<FoodItem>>;
}
