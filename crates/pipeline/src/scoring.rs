//! Suitability scoring for food items.
//!
//! Each item gets the sum of three independent signals:
//!
//! ```text
//! score = (max_calories - calories) / max_calories   # skipped if max is 0
//!       + (max_fat - fat) / max_fat                  # skipped if max is 0
//!       + 1.0 if the user prefers vegan and the item is vegan-friendly
//! ```
//!
//! The maxima come from the whole loaded dataset, never from a filtered
//! subset, so scoring has to run before filtering.

use crate::preferences::Preferences;
use data_loader::FoodItem;

/// Flat bonus for vegan-friendly items when the user prefers vegan
pub const VEGAN_BONUS: f64 = 1.0;

/// Dataset-wide normalization bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DatasetMaxima {
    pub calories: f64,
    pub fat: f64,
}

impl DatasetMaxima {
    /// Scan the dataset for its largest calorie and fat values.
    ///
    /// Starts from zero, so an empty dataset (or one with only
    /// non-positive values) has zero maxima.
    pub fn from_items(items: &[FoodItem]) -> Self {
        items.iter().fold(Self::default(), |mut maxima, item| {
            let calories = item.calories as f64;
            if calories > maxima.calories {
                maxima.calories = calories;
            }
            if item.fat > maxima.fat {
                maxima.fat = item.fat;
            }
            maxima
        })
    }
}

/// Per-signal contributions to an item's score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    pub calorie: f64,
    pub fat: f64,
    pub vegan_bonus: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.calorie + self.fat + self.vegan_bonus
    }
}

/// Scores items against fixed maxima and a vegan preference.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    maxima: DatasetMaxima,
    prefer_vegan: bool,
}

impl Scorer {
    pub fn new(maxima: DatasetMaxima, prefer_vegan: bool) -> Self {
        Self {
            maxima,
            prefer_vegan,
        }
    }

    /// Build a scorer whose bounds cover the entire dataset.
    pub fn for_dataset(items: &[FoodItem], preferences: &Preferences) -> Self {
        Self::new(DatasetMaxima::from_items(items), preferences.prefer_vegan)
    }

    pub fn maxima(&self) -> DatasetMaxima {
        self.maxima
    }

    /// Compute each signal's contribution for one item.
    pub fn breakdown(&self, item: &FoodItem) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::default();

        // Lower is better for both nutrients
        if self.maxima.calories != 0.0 {
            breakdown.calorie =
                (self.maxima.calories - item.calories as f64) / self.maxima.calories;
        }
        if self.maxima.fat != 0.0 {
            breakdown.fat = (self.maxima.fat - item.fat) / self.maxima.fat;
        }
        if self.prefer_vegan && item.is_vegan_friendly {
            breakdown.vegan_bonus = VEGAN_BONUS;
        }

        breakdown
    }

    pub fn score(&self, item: &FoodItem) -> f64 {
        self.breakdown(item).total()
    }

    /// Overwrite the score of every item.
    pub fn apply(&self, items: &mut [FoodItem]) {
        for item in items.iter_mut() {
            item.score = self.score(item);
        }
    }
}

/// Score the full dataset in place.
///
/// Returns the scorer so callers can explain individual scores later.
pub fn calculate_scores(items: &mut [FoodItem], preferences: &Preferences) -> Scorer {
    let scorer = Scorer::for_dataset(items, preferences);
    tracing::debug!(
        "Scoring {} items (max calories: {}, max fat: {})",
        items.len(),
        scorer.maxima.calories,
        scorer.maxima.fat
    );
    scorer.apply(items);
    scorer
}
