//! Interactive collection of the user's preferences.
//!
//! Each answer is a single whitespace-delimited token. Tokens may share a
//! line, so "300 10 yes" answers all three prompts at once.

use pipeline::{parse_vegan_answer, Preferences};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::num::ParseIntError;
use thiserror::Error;

pub const MAX_CALORIES_PROMPT: &str = "Enter your maximum calorie intake per food item:";
pub const MIN_PROTEIN_PROMPT: &str = "Enter your minimum protein requirement per food item:";
pub const VEGAN_PROMPT: &str = "Do you prefer vegan options? (yes/no):";

/// Failures while reading answers. There is no retry.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input ended before {field} was given")]
    UnexpectedEof { field: &'static str },

    #[error("Invalid {field} '{value}': {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Splits buffered input into whitespace-delimited tokens across lines.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn expect_token(&mut self, field: &'static str) -> Result<String, PromptError> {
        self.next_token()?
            .ok_or(PromptError::UnexpectedEof { field })
    }

    fn expect_integer(&mut self, field: &'static str) -> Result<i64, PromptError> {
        let token = self.expect_token(field)?;
        token
            .parse()
            .map_err(|source| PromptError::InvalidNumber {
                field,
                value: token.clone(),
                source,
            })
    }
}

/// Ask for the three preferences in order and read one answer after each.
pub fn collect_preferences<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
) -> Result<Preferences, PromptError> {
    let mut tokens = TokenReader::new(input);

    ask(output, MAX_CALORIES_PROMPT)?;
    let max_calories = tokens.expect_integer("maximum calories")?;

    ask(output, MIN_PROTEIN_PROMPT)?;
    let min_protein = tokens.expect_integer("minimum protein")?;

    ask(output, VEGAN_PROMPT)?;
    let prefer_vegan = parse_vegan_answer(&tokens.expect_token("vegan preference")?);

    tracing::debug!(
        max_calories,
        min_protein,
        prefer_vegan,
        "Collected preferences"
    );

    Ok(Preferences::new(max_calories, min_protein, prefer_vegan))
}

fn ask<W: Write>(output: &mut W, prompt: &str) -> io::Result<()> {
    writeln!(output, "{}", prompt)?;
    output.flush()
}
