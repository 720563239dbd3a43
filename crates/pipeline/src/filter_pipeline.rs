//! The FilterPipeline chains hard constraints.
//!
//! Filters run in insertion order; an item must pass all of them.

use crate::filters::{CalorieCeilingFilter, FatCeilingFilter, VeganFilter};
use crate::preferences::Preferences;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::FoodItem;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CalorieCeilingFilter)
///     .add_filter(FatCeilingFilter::default())
///     .add_filter(VeganFilter);
///
/// let kept = pipeline.apply(items, &preferences)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The three hard constraints every recommendation must satisfy:
    /// calorie ceiling, fat ceiling and the vegan requirement.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(CalorieCeilingFilter)
            .add_filter(FatCeilingFilter::default())
            .add_filter(VeganFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence.
    ///
    /// Stops at the first filter error.
    pub fn apply(&self, items: Vec<FoodItem>, preferences: &Preferences) -> Result<Vec<FoodItem>> {
        let mut current = items;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, preferences)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
