use thiserror::Error;

use crate::domain::event::errors::EventError;

/// Error for CommentContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentContentError {
    #[error("Comment must not be blank")]
    Blank,

    #[error("Comment too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all comment-related operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    #[error("Invalid comment: {0}")]
    InvalidContent(#[from] CommentContentError),

    #[error("Comment not found: {0}")]
    NotFound(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Not authorized to delete comment {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<EventError> for CommentError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound(id) => CommentError::EventNotFound(id),
            EventError::DatabaseError(msg) => CommentError::DatabaseError(msg),
            other => CommentError::Unknown(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for CommentError {
    fn from(err: anyhow::Error) -> Self {
        CommentError::Unknown(err.to_string())
    }
}
