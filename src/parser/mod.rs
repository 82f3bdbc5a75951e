//! CSV Parser
//!
//! Turns raw bytes into a [`Dataset`]. Quoting is linted by [`lexer`] first,
//! then records are read with the `csv` crate.

pub mod dataset;
pub mod lexer;

pub use dataset::{Dataset, FIRST_DATA_ROW};
pub use lexer::lint_quoting;

use crate::error::ParseError;

/// How records whose field count differs from the header are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowWidth {
    /// Any field count is accepted; only fields that are present get checked
    #[default]
    Flexible,
    /// Every record must have exactly as many fields as the header
    Strict,
}

/// Options for turning raw text into a dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub row_width: RowWidth,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            row_width: RowWidth::Strict,
        }
    }
}

/// Parse raw CSV bytes into header and data rows.
///
/// Blank lines are skipped and never become rows. Fields are kept exactly as
/// decoded, without trimming; the only exception is padding in front of an
/// opening quote, which is not part of the quoted value.
pub fn parse_dataset(input: &[u8], options: &ParseOptions) -> Result<Dataset, ParseError> {
    let input = lint_quoting(input)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(options.row_width == RowWidth::Flexible)
        .from_reader(&input[..]);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(classify_csv_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let dataset = Dataset::new(rows);
    if dataset.is_empty() {
        log::debug!("input has no rows");
    } else {
        log::debug!(
            "parsed {} rows of {} columns ({:?} width)",
            dataset.len(),
            dataset.column_count(),
            options.row_width
        );
    }

    Ok(dataset)
}

/// Map reader failures onto the structural error variants
fn classify_csv_error(err: csv::Error) -> ParseError {
    let line = err.position().map_or(0, |pos| pos.line());

    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => ParseError::FieldCount {
            line,
            expected: *expected_len,
            found: *len,
        },
        csv::ErrorKind::Utf8 { .. } => ParseError::InvalidUtf8 { line },
        _ => ParseError::Csv(err),
    }
}
