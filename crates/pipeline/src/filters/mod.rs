//! Hard-constraint filters.
//!
//! Each filter excludes items regardless of their score.

pub mod calorie_ceiling;
pub mod fat_ceiling;
pub mod vegan;

// Re-export for convenience
pub use calorie_ceiling::CalorieCeilingFilter;
pub use fat_ceiling::{FatCeilingFilter, MAX_FAT_GRAMS};
pub use vegan::VeganFilter;
