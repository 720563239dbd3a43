//! Per-run dietary preferences.

/// What the user asked for in this run.
///
/// `min_protein` is collected but the dataset has no protein column, so no
/// filter or score term reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub max_calories: i64,
    pub min_protein: i64,
    pub prefer_vegan: bool,
}

impl Preferences {
    pub fn new(max_calories: i64, min_protein: i64, prefer_vegan: bool) -> Self {
        Self {
            max_calories,
            min_protein,
            prefer_vegan,
        }
    }
}

/// Interpret the answer to "prefer vegan options?".
///
/// Only "yes" (any case) counts; everything else means no.
pub fn parse_vegan_answer(answer: &str) -> bool {
    answer.to_lowercase() == "yes"
}
