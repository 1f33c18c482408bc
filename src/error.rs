//! Error types for Pajek conversion

use thiserror::Error;

/// Failures surfaced by table reading and Pajek serialization.
///
/// Every error is fatal to the call that raised it; nothing is retried.
#[derive(Debug, Error)]
pub enum PajekError {
    /// A declared column is absent, or the configuration itself is invalid
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A row holds a value that cannot be serialized (`row` is 1-based, header excluded)
    #[error("data error at row {row}: {message}")]
    Data { row: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PajekError {
    pub fn data(row: usize, message: impl Into<String>) -> Self {
        Self::Data {
            row,
            message: message.into(),
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data { .. })
    }
}
