//! Ordering of recommendations.

use data_loader::FoodItem;
use std::cmp::Ordering;

/// Sort items by score, highest first.
///
/// The sort is stable: items with equal scores keep their dataset order.
pub fn rank_by_score(mut items: Vec<FoodItem>) -> Vec<FoodItem> {
    items.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    items
}
