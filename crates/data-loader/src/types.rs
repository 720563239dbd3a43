//! Core domain types for the food dataset.

use serde::{Deserialize, Serialize};

/// Identifier taken from the dataset's ID column
pub type FoodId = i64;

/// One row of the food dataset.
///
/// Everything except `score` comes straight from the source row. `score`
/// stays at `0.0` until the scoring phase writes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    pub calories: i64,
    /// Grams of fat
    pub fat: f64,
    pub is_vegan_friendly: bool,
    /// Free text, carried through but not used for ranking
    pub disease_tags: String,
    pub taste_tags: String,
    pub age_group: String,
    #[serde(default)]
    pub score: f64,
}

impl FoodItem {
    /// Build an unscored item with empty free-text columns.
    ///
    /// Handy for tests and synthetic datasets.
    pub fn new(
        id: FoodId,
        name: impl Into<String>,
        calories: i64,
        fat: f64,
        is_vegan_friendly: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
            fat,
            is_vegan_friendly,
            disease_tags: String::new(),
            taste_tags: String::new(),
            age_group: String::new(),
            score: 0.0,
        }
    }
}
