//! End-to-end recommendation: score, filter, rank.

use crate::filter_pipeline::FilterPipeline;
use crate::preferences::Preferences;
use crate::ranking::rank_by_score;
use crate::scoring::{Scorer, calculate_scores};
use anyhow::Result;
use data_loader::FoodItem;

/// Ranked output of one run, plus the scorer that produced the scores.
#[derive(Debug, Clone)]
pub struct Recommendations {
    pub items: Vec<FoodItem>,
    pub scorer: Scorer,
}

/// Score the whole dataset, then keep and rank the items passing every
/// hard constraint.
///
/// Scores are written back into `items`; the returned list holds copies.
pub fn recommend(items: &mut [FoodItem], preferences: &Preferences) -> Result<Recommendations> {
    let scorer = calculate_scores(items, preferences);
    let kept = FilterPipeline::standard().apply(items.to_vec(), preferences)?;
    tracing::info!(
        "{} of {} food items match the preferences",
        kept.len(),
        items.len()
    );

    Ok(Recommendations {
        items: rank_by_score(kept),
        scorer,
    })
}
