//! Validation Engine
//!
//! Row classification, separated from parsing and output concerns.

pub mod engine;

pub use engine::{classify_row, row_outcomes, validate, vet, vet_reader, InvalidRecord, RowOutcome};

// Re-export common types
pub use engine::VetResult;
