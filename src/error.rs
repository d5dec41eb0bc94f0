//! Error types for selection and benchmarking.
//!
//! Every failure mode has a named variant. Sentinel leak is deliberately
//! absent: it is boundary behaviour of sentinel initialization, not a failure.

use thiserror::Error;

/// Errors raised by the selection engine and the strategy registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("selection count must be at least 1")]
    InvalidCount,

    #[error("value at position {position} has no total order with the other values")]
    IncomparableValue { position: usize },

    #[error("requested the {requested} largest values but the input holds only {available}")]
    InsufficientInput { requested: usize, available: usize },

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("strategy already registered: {0}")]
    DuplicateStrategy(String),
}

/// Result type alias for selection operations.
pub type SelectResult<T> = Result<T, SelectError>;

/// Errors raised by the measurement harness.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid benchmark configuration: {0}")]
    InvalidConfig(String),

    #[error("malformed timing report: {0:?}")]
    MalformedReport(String),

    #[error("unknown time unit: {0}")]
    UnknownTimeUnit(String),

    #[error("no strategies registered with prefix {0:?}")]
    NoStrategies(String),

    #[error("{function} disagrees with the full-sort baseline at {element_count} elements")]
    Mismatch {
        function: String,
        element_count: usize,
    },

    #[error("selection failed: {0}")]
    Select(#[from] SelectError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type alias for harness operations.
pub type BenchResult<T> = Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_input_message() {
        let err = SelectError::InsufficientInput {
            requested: 5,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "requested the 5 largest values but the input holds only 2"
        );
    }

    #[test]
    fn test_select_error_lifts_into_bench_error() {
        let err: BenchError = SelectError::InvalidCount.into();
        assert!(matches!(err, BenchError::Select(SelectError::InvalidCount)));
    }
}
