//! cvet
//!
//! Vets CSV data before ingestion: every data row is either complete, or
//! reported with the names of its empty columns.
//!
//! This library provides:
//! - CSV parsing with structural quote checks
//! - Row validation against the header
//! - The JSON response envelope used by the `cvet` binary
//! - Configuration management

pub mod config;
pub mod error;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use error::{ParseError, VetError};
pub use parser::{parse_dataset, Dataset, ParseOptions, RowWidth};
pub use report::Response;
pub use validation::{
    classify_row, row_outcomes, validate, vet, vet_reader, InvalidRecord, RowOutcome, VetResult,
};
