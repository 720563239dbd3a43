mod presenter;
mod prompt;

use anyhow::{Context, Result};
use clap::Parser;
use data_loader::{load_food_items, DEFAULT_DATA_FILE};
use pipeline::recommend;
use presenter::{write_recommendations, PresentOptions};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// FoodRecs - rank food items against simple dietary preferences
#[derive(Parser)]
#[command(name = "food-recs")]
#[command(about = "Recommends food items by calories, fat and vegan preference", long_about = None)]
struct Cli {
    /// Path to the food dataset (CSV)
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Show at most this many recommendations
    #[arg(short, long)]
    limit: Option<usize>,

    /// Show how each score was put together
    #[arg(long)]
    explain: bool,
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout only carries the session
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    run(
        &cli,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// One session: load the dataset, ask for preferences, print the ranking.
///
/// A load failure is reported on `err` and ends the run with a failure
/// status; any other error propagates.
fn run<R: BufRead, W: Write, E: Write>(
    cli: &Cli,
    input: R,
    out: &mut W,
    err: &mut E,
) -> Result<ExitCode> {
    let mut items = match load_food_items(&cli.data_file) {
        Ok(items) => items,
        Err(load_err) => {
            writeln!(err, "Error loading food data: {}", load_err)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let preferences =
        prompt::collect_preferences(input, out).context("Failed to read preferences")?;

    let recommendations = recommend(&mut items, &preferences)?;

    let options = PresentOptions {
        limit: cli.limit,
        explain: cli.explain,
    };
    write_recommendations(out, &recommendations, &options)
        .context("Failed to print recommendations")?;

    Ok(ExitCode::SUCCESS)
}
