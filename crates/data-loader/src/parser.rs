//! Parser for the food dataset CSV.
//!
//! Layout (header row first, always skipped):
//! `id,name,calories,fat,vegan,diseases,taste,age_group`
//!
//! Columns past the eighth are ignored. Every numeric column must parse,
//! otherwise the whole load fails.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading columns a food row must provide
pub const FOOD_FIELD_COUNT: usize = 8;

/// Dataset value of the vegan column that marks an item vegan-friendly.
///
/// The column answers "contains animal products?", so the Indonesian
/// "no" is what makes an item vegan-friendly.
pub const VEGAN_FRIENDLY_TOKEN: &str = "tidak";

/// Load and parse the dataset at `path`.
///
/// The file handle lives only for the duration of this call.
pub fn load_food_items(path: &Path) -> Result<Vec<FoodItem>> {
    let file = File::open(path).map_err(|source| DataLoadError::FileOpen {
        path: path.display().to_string(),
        source,
    })?;

    let items = parse_food_items(file, &path.display().to_string())?;
    tracing::info!("Loaded {} food items from {}", items.len(), path.display());
    Ok(items)
}

/// Parse food rows from any reader.
///
/// `source` names the input in error messages.
pub fn parse_food_items<R: Read>(reader: R, source: &str) -> Result<Vec<FoodItem>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut items = Vec::new();

    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        // Header is line 1, so the first data row is line 2
        let line_no = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 2);

        if record.len() < FOOD_FIELD_COUNT {
            return Err(DataLoadError::FieldCountMismatch {
                expected: FOOD_FIELD_COUNT,
                found: record.len(),
                line: line_no,
            });
        }

        let item = FoodItem {
            id: record[0].parse().map_err(|e| DataLoadError::ParseError {
                file: source.to_string(),
                line: line_no,
                reason: format!("Invalid id '{}': {}", &record[0], e),
            })?,
            name: record[1].to_string(),
            calories: record[2].parse().map_err(|e| DataLoadError::ParseError {
                file: source.to_string(),
                line: line_no,
                reason: format!("Invalid calories '{}': {}", &record[2], e),
            })?,
            fat: record[3].parse().map_err(|e| DataLoadError::ParseError {
                file: source.to_string(),
                line: line_no,
                reason: format!("Invalid fat '{}': {}", &record[3], e),
            })?,
            is_vegan_friendly: parse_vegan_indicator(&record[4]),
            disease_tags: record[5].to_string(),
            taste_tags: record[6].to_string(),
            age_group: record[7].to_string(),
            score: 0.0,
        };

        items.push(item);
    }

    Ok(items)
}

/// Map the dataset's vegan column to a flag.
///
/// Example: "Tidak" -> true, "Ya" -> false
pub fn parse_vegan_indicator(field: &str) -> bool {
    field.to_lowercase() == VEGAN_FRIENDLY_TOKEN
}
