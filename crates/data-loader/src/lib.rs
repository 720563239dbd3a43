//! # Data Loader Crate
//!
//! This crate loads the food dataset (a comma-separated table) into memory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (FoodItem, FoodId)
//! - **parser**: Parse the CSV file into `FoodItem`s
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::load_food_items;
//! use std::path::Path;
//!
//! let items = load_food_items(Path::new("data.csv"))?;
//! println!("Loaded {} food items", items.len());
//! ```
//!
//! The loader hands back an owned `Vec<FoodItem>`; later phases borrow it.

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{load_food_items, parse_food_items, parse_vegan_indicator};
pub use types::{FoodId, FoodItem};

/// Dataset file looked up in the working directory when none is given
pub const DEFAULT_DATA_FILE: &str = "data.csv";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_unscored() {
        let item = FoodItem::new(7, "Sayur asem", 90, 1.5, true);

        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Sayur asem");
        assert_eq!(item.score, 0.0);
        assert!(item.disease_tags.is_empty());
        assert!(item.taste_tags.is_empty());
        assert!(item.age_group.is_empty());
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = DataLoadError::ParseError {
            file: "data.csv".to_string(),
            line: 4,
            reason: "Invalid fat 'x'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parse error at line 4 in data.csv: Invalid fat 'x'"
        );

        let err = DataLoadError::FieldCountMismatch {
            expected: 8,
            found: 3,
            line: 2,
        };
        assert_eq!(err.to_string(), "Expected 8 fields but found 3 in line 2");
    }
}
