//! Console rendering of ranked recommendations.

use colored::Colorize;
use pipeline::Recommendations;
use std::io::{self, Write};

pub const NO_MATCH_MESSAGE: &str = "No food items match your preferences.";
pub const HEADER: &str = "Recommended food items for you:";

/// How much of the ranking to show.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentOptions {
    /// Show at most this many items (all when `None`)
    pub limit: Option<usize>,
    /// Add the per-signal score breakdown under each item
    pub explain: bool,
}

/// Write the recommendation list, or the no-match message when the ranking
/// is empty.
///
/// The limit only trims the list; `Some(0)` leaves just the header.
pub fn write_recommendations<W: Write>(
    out: &mut W,
    recommendations: &Recommendations,
    options: &PresentOptions,
) -> io::Result<()> {
    if recommendations.items.is_empty() {
        writeln!(out, "{}", NO_MATCH_MESSAGE)?;
        return Ok(());
    }

    let limit = options.limit.unwrap_or(usize::MAX);
    writeln!(out, "{}", HEADER.bold())?;
    for item in recommendations.items.iter().take(limit) {
        writeln!(
            out,
            "- {}: {} calories, {:.1} g fat, Score: {:.2}",
            item.name, item.calories, item.fat, item.score
        )?;
        if options.explain {
            let breakdown = recommendations.scorer.breakdown(item);
            writeln!(
                out,
                "    calories {:.2} + fat {:.2} + vegan bonus {:.2}",
                breakdown.calorie, breakdown.fat, breakdown.vegan_bonus
            )?;
        }
    }
    Ok(())
}
