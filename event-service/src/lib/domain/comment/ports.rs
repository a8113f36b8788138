use async_trait::async_trait;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::comment::models::NewComment;
use crate::domain::event::models::EventId;
use crate::domain::user::models::User;

/// Port for comment domain service operations.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// Post a comment authored by `author`.
    ///
    /// # Errors
    /// * `EventNotFound` - Target event does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_comment(
        &self,
        author: &User,
        command: CreateCommentCommand,
    ) -> Result<Comment, CommentError>;

    /// All comments on an event, oldest first.
    ///
    /// Unknown events yield an empty list.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_comments_for_event(&self, event_id: &EventId)
        -> Result<Vec<Comment>, CommentError>;

    /// Delete a comment on behalf of `actor`.
    ///
    /// # Errors
    /// * `NotFound` - Comment does not exist
    /// * `Forbidden` - `actor` is not the author
    /// * `DatabaseError` - Database operation failed
    async fn delete_comment(&self, actor: &User, id: &CommentId) -> Result<(), CommentError>;
}

/// Persistence operations for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentError>;

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;

    /// Comments on `event_id` ordered by creation time, then id.
    async fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Comment>, CommentError>;

    /// # Errors
    /// * `NotFound` - Comment does not exist
    async fn delete(&self, id: &CommentId) -> Result<(), CommentError>;
}
