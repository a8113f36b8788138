use thiserror::Error;

/// Error for EventTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventTitleError {
    #[error("Event title must not be blank")]
    Blank,

    #[error("Event title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EventLocation validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventLocationError {
    #[error("Event location must not be blank")]
    Blank,

    #[error("Event location too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all event-related operations
#[derive(Debug, Clone, Error)]
pub enum EventError {
    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] EventTitleError),

    #[error("Invalid location: {0}")]
    InvalidLocation(#[from] EventLocationError),

    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Not authorized to modify event {0}")]
    Forbidden(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for EventError {
    fn from(err: anyhow::Error) -> Self {
        EventError::Unknown(err.to_string())
    }
}
