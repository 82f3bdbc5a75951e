//! Error Types
//!
//! Only structural problems with the input are errors. Empty fields are
//! reported as data by the validator and never show up here.

use thiserror::Error;

/// The input could not be decoded into rows and fields.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A quoted field was still open at end of input
    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: u64 },

    /// A `"` appeared inside a field that did not start with a quote
    #[error("bare \" in non-quoted field on line {line}")]
    BareQuote { line: u64 },

    /// A closing quote was followed by something other than a delimiter
    #[error("extraneous or missing \" in quoted field on line {line}")]
    ExtraneousQuote { line: u64 },

    /// Strict width mode only
    #[error("record on line {line} has {found} fields, expected {expected}")]
    FieldCount {
        line: u64,
        expected: u64,
        found: u64,
    },

    #[error("invalid UTF-8 on line {line}")]
    InvalidUtf8 { line: u64 },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ParseError {
    /// Line the problem was detected on, when the reader reported one
    pub fn line(&self) -> Option<u64> {
        match self {
            ParseError::UnterminatedQuote { line }
            | ParseError::BareQuote { line }
            | ParseError::ExtraneousQuote { line }
            | ParseError::FieldCount { line, .. }
            | ParseError::InvalidUtf8 { line } => Some(*line),
            ParseError::Csv(err) => err.position().map(|pos| pos.line()),
        }
    }
}

/// Failure of a vetting call that also had to read its input.
#[derive(Debug, Error)]
pub enum VetError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
