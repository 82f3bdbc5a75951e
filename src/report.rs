//! Response Envelope
//!
//! The JSON document the CLI prints for each vetted file.

use std::fmt::Display;

use serde::Serialize;

use crate::validation::VetResult;

const SUMMARY_VETTED: &str = "File vetted successfully";
const SUMMARY_USAGE: &str = "At least one argument expected";
const SUMMARY_INTERNAL: &str = "An internal error occurred";

/// Machine-readable failure with a suggested fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub msg: String,
    pub fix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub success: bool,
    pub summary: String,
    /// Only set when several files are vetted in one run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<VetResult>,
}

impl Response {
    pub fn vetted(result: VetResult) -> Self {
        Self {
            success: true,
            summary: SUMMARY_VETTED.to_string(),
            file: None,
            error: None,
            data: Some(result),
        }
    }

    /// No input path was given
    pub fn usage(program: &str) -> Self {
        Self::failure(
            SUMMARY_USAGE,
            "cvet expects at least one argument which is the path to the csv file being vetted"
                .to_string(),
            format!(
                "call cvet with the path to the csv file as the first argument. Eg {} /path/to/csv/file",
                program
            ),
        )
    }

    /// The file could not be opened or read
    pub fn unreadable(err: impl Display) -> Self {
        Self::failure(
            SUMMARY_INTERNAL,
            processing_message(err),
            "Ensure you provided a valid csv file.".to_string(),
        )
    }

    /// The file was read but is not valid CSV
    pub fn unparsable(err: impl Display) -> Self {
        Self::failure(
            SUMMARY_INTERNAL,
            processing_message(err),
            "Ensure you provided a valid csv file. If this continues, please wait and try again later. You can also contact support".to_string(),
        )
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Serialize to a single JSON document
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    fn failure(summary: &str, msg: String, fix: String) -> Self {
        Self {
            success: false,
            summary: summary.to_string(),
            file: None,
            error: Some(ErrorDetail { msg, fix }),
            data: None,
        }
    }
}

fn processing_message(err: impl Display) -> String {
    format!("There was an error trying to process the csv file: {}", err)
}
