use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::comment::models::Comment;

pub mod create_comment;
pub mod delete_comment;
pub mod list_event_comments;

pub use create_comment::create_comment;
pub use delete_comment::delete_comment;
pub use list_event_comments::list_event_comments;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentResponseData {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub event_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentResponseData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.0,
            content: comment.content.as_str().to_string(),
            user_id: comment.user_id.0,
            event_id: comment.event_id.0,
            created_at: comment.created_at,
        }
    }
}
