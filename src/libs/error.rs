//! Typed error taxonomy for task store operations.
//!
//! Every failure a store operation can produce falls into one of three
//! kinds: bad input (`Validation`), a missing record (`NotFound`), or an
//! unreachable/corrupt database (`Storage`). The CLI maps each kind to its
//! own process exit code so scripts can distinguish them.

use thiserror::Error;

/// Errors produced by task store operations.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Input failed a shape or value check. The message names the offending field.
    #[error("{0}")]
    Validation(String),

    /// No task exists with the referenced id.
    #[error("Task with id {0} not found")]
    NotFound(i64),

    /// The underlying database is unreachable or corrupt.
    #[error("Storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl TaskError {
    /// Process exit code for this error kind.
    ///
    /// 0 is success, 1 is reserved for unclassified failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskError::Validation(_) => 3,
            TaskError::NotFound(_) => 4,
            TaskError::Storage(_) => 5,
        }
    }
}
