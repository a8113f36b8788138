use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::comment::errors::CommentContentError;
use crate::domain::event::models::EventId;
use crate::domain::user::models::UserId;

/// Comment left by a user on an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub content: CommentContent,
    pub user_id: UserId,
    pub event_id: EventId,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }
}

/// Comment unique identifier type, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub i64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Comment body value type
///
/// Must contain a non-whitespace character and be at most 2000 characters.
/// Stored as given, without trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    const MAX_LENGTH: usize = 2000;

    pub fn new(content: String) -> Result<Self, CommentContentError> {
        if content.trim().is_empty() {
            return Err(CommentContentError::Blank);
        }

        let length = content.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(CommentContentError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Comment ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: CommentContent,
    pub user_id: UserId,
    pub event_id: EventId,
}

/// Command to post a comment on an event
#[derive(Debug)]
pub struct CreateCommentCommand {
    pub content: CommentContent,
    pub event_id: EventId,
}
