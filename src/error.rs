//! Error types shared by every solver.
//!
//! Only malformed input and rejected configurations are errors. A search
//! that runs out of admissible moves or reachable cities still produces a
//! [`SearchResult`](crate::SearchResult) and records why it stopped.

use thiserror::Error;

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, TspError>;

/// Solver error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TspError {
    /// The distance matrix, start city, or initial tour is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TspError {
    pub(crate) fn input(msg: impl Into<String>) -> Self {
        TspError::InvalidInput(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        TspError::InvalidConfig(msg.into())
    }
}
