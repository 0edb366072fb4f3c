//! Record ingestion errors

use std::path::PathBuf;

use airguard_core::AssessmentError;
use thiserror::Error;

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised while reading or evaluating records
#[derive(Debug, Error)]
pub enum RecordError {
    /// The source could not be opened or read
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A data row is shorter than the header
    #[error("Line {line}: missing value for column {field}")]
    MissingField {
        /// 1-based line number
        line: usize,
        /// Header name of the missing column
        field: String,
    },

    /// A numeric column holds something that is not a number
    #[error("Line {line}: invalid number {value:?} in column {field}")]
    InvalidNumber {
        /// 1-based line number
        line: usize,
        /// Header name of the column
        field: String,
        /// Raw cell content
        value: String,
    },

    /// A JSON Lines record could not be decoded
    #[error("Line {line}: {source}")]
    Json {
        /// 1-based line number
        line: usize,
        /// Decoder failure
        #[source]
        source: serde_json::Error,
    },

    /// The record was read but could not be assessed
    #[error("Assessment failed: {0}")]
    Assessment(#[from] AssessmentError),
}

impl RecordError {
    /// Whether the error concerns a single record and reading may continue
    pub fn is_per_record(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. } | Self::InvalidNumber { .. } | Self::Json { .. }
        )
    }
}
