//! Task error types

use thiserror::Error;

/// Errors from constructing or mutating a task.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("the description of a task cannot be empty")]
    EmptyDescription,

    #[error("the '{0}' field of a task cannot be empty")]
    EmptyField(&'static str),

    #[error("only deadline tasks have a 'by' field")]
    NoDeadlineField,
}

/// Errors from decoding a task record line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("empty record")]
    Empty,

    #[error("unknown task tag '{0}'")]
    UnknownTag(String),

    #[error("invalid done marker '{0}', expected '0' or '1'")]
    InvalidDoneMarker(String),

    #[error("record has {found} fields, expected {expected}")]
    FieldCount { expected: usize, found: usize },

    #[error(transparent)]
    Task(#[from] TaskError),
}
