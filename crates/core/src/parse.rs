//! Parsing of raw solver output.
//!
//! Solvers print a whitespace-separated stream of numbers in records of
//! [`COLUMNS`] values: `r`, the numerical result, the analytical result, and
//! an auxiliary value. Line breaks carry no meaning; only token order does.

use thiserror::Error;

use crate::SolverResult;

/// Number of values in one output record.
pub const COLUMNS: usize = 4;

/// Errors that can occur when parsing solver output.
///
/// Malformed output is never repaired: no record is dropped or padded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("output contains no samples")]
    Empty,

    #[error("expected a multiple of 4 values, found {count}")]
    TokenCount { count: usize },

    #[error("value {index} (`{token}`) is not a number")]
    InvalidToken { index: usize, token: String },
}

/// Parses raw solver output into a [`SolverResult`].
///
/// Values at positions `4i`, `4i + 1`, `4i + 2`, and `4i + 3` become sample
/// `i` of `r`, `numerical`, `analytical`, and `auxiliary`.
///
/// # Errors
///
/// Returns a [`ParseError`] if the output is empty, if the number of values
/// is not a multiple of [`COLUMNS`], or if any value is not a number.
pub fn parse_output(text: &str) -> Result<SolverResult, ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    if tokens.len() % COLUMNS != 0 {
        return Err(ParseError::TokenCount {
            count: tokens.len(),
        });
    }

    let values = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|_| ParseError::InvalidToken {
                index,
                token: (*token).to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let samples = values.len() / COLUMNS;
    let mut r = Vec::with_capacity(samples);
    let mut numerical = Vec::with_capacity(samples);
    let mut analytical = Vec::with_capacity(samples);
    let mut auxiliary = Vec::with_capacity(samples);

    for record in values.chunks_exact(COLUMNS) {
        r.push(record[0]);
        numerical.push(record[1]);
        analytical.push(record[2]);
        auxiliary.push(record[3]);
    }

    log::debug!("parsed {samples} samples");

    Ok(SolverResult::from_records(r, numerical, analytical, auxiliary))
}
