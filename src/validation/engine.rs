//! Validation Engine
//!
//! Classifies data rows by empty fields. Parsing lives in `crate::parser`;
//! output formatting lives in `crate::report`.

use std::io::Read;

use serde::Serialize;

use crate::error::{ParseError, VetError};
use crate::parser::{self, Dataset, FIRST_DATA_ROW, ParseOptions};

/// A data row with some, but not all, fields empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidRecord {
    /// 1-based row number; the header is row 1
    pub row: usize,
    /// Header names of the empty fields, left to right
    pub columns: Vec<String>,
}

/// What happened to a single data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// No empty fields; the row exactly as parsed
    Valid(Vec<String>),
    Invalid(InvalidRecord),
    /// Every field was empty, so the row is not reported at all
    Dropped { row: usize },
}

/// Valid rows and invalid-row reports, in encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VetResult {
    pub valid_records: Vec<Vec<String>>,
    pub invalid_records: Vec<InvalidRecord>,
    /// Fully-empty rows that were discarded
    #[serde(skip)]
    pub dropped_rows: usize,
}

impl VetResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of data rows that were reported in either list
    pub fn reported_rows(&self) -> usize {
        self.valid_records.len() + self.invalid_records.len()
    }

    /// True when no row had an empty field
    pub fn is_clean(&self) -> bool {
        self.invalid_records.is_empty()
    }

    fn push(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Valid(fields) => self.valid_records.push(fields),
            RowOutcome::Invalid(record) => self.invalid_records.push(record),
            RowOutcome::Dropped { .. } => self.dropped_rows += 1,
        }
    }
}

fn is_empty_field(field: &str) -> bool {
    field.trim().is_empty()
}

/// Classify one data row against the header.
///
/// Only fields that are physically present are checked. A row whose fields
/// are all empty is dropped whatever its width, so whitespace-only lines never
/// become reports. Fields past the end of the header have no column name and
/// are never reported, but are kept in a valid row and keep a row with data in
/// them from being dropped.
pub fn classify_row(row: usize, header: &[String], fields: Vec<String>) -> RowOutcome {
    let columns: Vec<String> = fields
        .iter()
        .zip(header)
        .filter(|(field, _)| is_empty_field(field))
        .map(|(_, name)| name.clone())
        .collect();

    let outcome = if columns.is_empty() {
        RowOutcome::Valid(fields)
    } else if fields.iter().all(|f| is_empty_field(f)) {
        RowOutcome::Dropped { row }
    } else {
        RowOutcome::Invalid(InvalidRecord { row, columns })
    };

    log::trace!("row {}: {:?}", row, outcome);
    outcome
}

/// Classify every data row, in order
pub fn row_outcomes(dataset: Dataset) -> impl Iterator<Item = RowOutcome> {
    let (header, rows) = dataset.into_parts();

    rows.into_iter()
        .enumerate()
        .map(move |(idx, fields)| classify_row(idx + FIRST_DATA_ROW, &header, fields))
}

/// Validate an entire dataset
pub fn validate(dataset: Dataset) -> VetResult {
    let mut result = VetResult::new();

    for outcome in row_outcomes(dataset) {
        result.push(outcome);
    }

    log::debug!(
        "validated {} valid, {} invalid, {} dropped",
        result.valid_records.len(),
        result.invalid_records.len(),
        result.dropped_rows
    );

    result
}

/// Parse and validate raw CSV bytes
pub fn vet(input: &[u8], options: &ParseOptions) -> Result<VetResult, ParseError> {
    let dataset = parser::parse_dataset(input, options)?;
    Ok(validate(dataset))
}

/// Read `reader` to the end, then parse and validate it
pub fn vet_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<VetResult, VetError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    Ok(vet(&input, options)?)
}
