//! Scoring, filtering and ranking of food items.
//!
//! This crate provides:
//! - Preferences, the per-run user input
//! - Scorer for the normalized suitability score
//! - Filter trait and implementations for the hard constraints
//! - FilterPipeline for composing filters
//! - Ranking by score
//!
//! ## Architecture
//! 1. Scorer computes dataset-wide maxima and scores every loaded item
//! 2. Filters remove items breaking a hard constraint
//! 3. The remaining items are sorted by score, highest first
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Preferences, recommend};
//!
//! let mut items = data_loader::load_food_items(path)?;
//! let recs = recommend(&mut items, &Preferences::new(300, 10, true))?;
//! for item in &recs.items {
//!     println!("{}: {:.2}", item.name, item.score);
//! }
//! ```

pub mod preferences;
pub mod scoring;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod ranking;
pub mod recommender;

// Re-export main types
pub use preferences::{Preferences, parse_vegan_answer};
pub use scoring::{DatasetMaxima, ScoreBreakdown, Scorer, calculate_scores};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use ranking::rank_by_score;
pub use recommender::{Recommendations, recommend};
