use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::comment::models::NewComment;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::event::models::EventId;
use crate::domain::event::ports::EventRepository;
use crate::domain::user::models::User;

/// Domain service implementation for comment operations.
///
/// Holds the event repository to check that a comment's target exists.
pub struct CommentService<CR, ER>
where
    CR: CommentRepository,
    ER: EventRepository,
{
    repository: Arc<CR>,
    event_repository: Arc<ER>,
}

impl<CR, ER> CommentService<CR, ER>
where
    CR: CommentRepository,
    ER: EventRepository,
{
    pub fn new(repository: Arc<CR>, event_repository: Arc<ER>) -> Self {
        Self {
            repository,
            event_repository,
        }
    }
}

#[async_trait]
impl<CR, ER> CommentServicePort for CommentService<CR, ER>
where
    CR: CommentRepository,
    ER: EventRepository,
{
    async fn create_comment(
        &self,
        author: &User,
        command: CreateCommentCommand,
    ) -> Result<Comment, CommentError> {
        if self
            .event_repository
            .find_by_id(&command.event_id)
            .await?
            .is_none()
        {
            return Err(CommentError::EventNotFound(command.event_id.to_string()));
        }

        let comment = self
            .repository
            .create(NewComment {
                content: command.content,
                user_id: author.id,
                event_id: command.event_id,
            })
            .await?;

        tracing::info!(
            comment_id = %comment.id,
            event_id = %comment.event_id,
            user_id = %author.id,
            "Comment created"
        );

        Ok(comment)
    }

    async fn list_comments_for_event(
        &self,
        event_id: &EventId,
    ) -> Result<Vec<Comment>, CommentError> {
        self.repository.list_by_event(event_id).await
    }

    async fn delete_comment(&self, actor: &User, id: &CommentId) -> Result<(), CommentError> {
        let comment = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CommentError::NotFound(id.to_string()))?;

        if !comment.is_authored_by(&actor.id) {
            tracing::warn!(
                comment_id = %id,
                author = %comment.user_id,
                actor = %actor.id,
                "Rejected deletion of another user's comment"
            );
            return Err(CommentError::Forbidden(id.to_string()));
        }

        self.repository.delete(id).await?;
        tracing::info!(comment_id = %id, "Comment deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::comment::models::CommentContent;
    use crate::domain::event::errors::EventError;
    use crate::domain::event::models::Event;
    use crate::domain::event::models::EventLocation;
    use crate::domain::event::models::EventTitle;
    use crate::domain::event::models::NewEvent;
    use crate::domain::pagination::Pagination;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;

    mock! {
        pub TestCommentRepository {}

        #[async_trait]
        impl CommentRepository for TestCommentRepository {
            async fn create(&self, comment: NewComment) -> Result<Comment, CommentError>;
            async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError>;
            async fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Comment>, CommentError>;
            async fn delete(&self, id: &CommentId) -> Result<(), CommentError>;
        }
    }

    mock! {
        pub TestEventRepository {}

        #[async_trait]
        impl EventRepository for TestEventRepository {
            async fn create(&self, event: NewEvent) -> Result<Event, EventError>;
            async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventError>;
            async fn list(&self, pagination: Pagination) -> Result<Vec<Event>, EventError>;
            async fn update(&self, event: Event) -> Result<Event, EventError>;
            async fn delete(&self, id: &EventId) -> Result<(), EventError>;
        }
    }

    fn user(id: i64) -> User {
        User {
            id: UserId(id),
            username: Username::new(format!("user{}", id)).unwrap(),
            email: EmailAddress::new(format!("user{}@example.com", id)).unwrap(),
            password_hash: "$2b$04$hash".to_string(),
            created_at: Utc::now(),
        }
    }

    fn event(id: i64) -> Event {
        Event {
            id: EventId(id),
            title: EventTitle::new("Rust meetup".to_string()).unwrap(),
            description: None,
            date_time: Utc::now(),
            location: EventLocation::new("Berlin".to_string()).unwrap(),
            creator_id: UserId(1),
            created_at: Utc::now(),
        }
    }

    fn comment(id: i64, author: i64) -> Comment {
        Comment {
            id: CommentId(id),
            content: CommentContent::new("Count me in".to_string()).unwrap(),
            user_id: UserId(author),
            event_id: EventId(10),
            created_at: Utc::now(),
        }
    }

    fn service(
        repository: MockTestCommentRepository,
        events: MockTestEventRepository,
    ) -> CommentService<MockTestCommentRepository, MockTestEventRepository> {
        CommentService::new(Arc::new(repository), Arc::new(events))
    }

    #[tokio::test]
    async fn test_create_comment_success() {
        let mut repository = MockTestCommentRepository::new();
        let mut events = MockTestEventRepository::new();

        events
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(event(id.0))));
        repository
            .expect_create()
            .withf(|comment| comment.user_id == UserId(2) && comment.event_id == EventId(10))
            .times(1)
            .returning(|new_comment| {
                Ok(Comment {
                    id: CommentId(1),
                    content: new_comment.content,
                    user_id: new_comment.user_id,
                    event_id: new_comment.event_id,
                    created_at: Utc::now(),
                })
            });

        let command = CreateCommentCommand {
            content: CommentContent::new("Count me in".to_string()).unwrap(),
            event_id: EventId(10),
        };
        let created = service(repository, events)
            .create_comment(&user(2), command)
            .await
            .unwrap();

        assert_eq!(created.id, CommentId(1));
        assert_eq!(created.content.as_str(), "Count me in");
    }

    #[tokio::test]
    async fn test_create_comment_on_missing_event() {
        let mut repository = MockTestCommentRepository::new();
        let mut events = MockTestEventRepository::new();

        events.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_create().times(0);

        let command = CreateCommentCommand {
            content: CommentContent::new("Hello?".to_string()).unwrap(),
            event_id: EventId(404),
        };
        let result = service(repository, events)
            .create_comment(&user(2), command)
            .await;

        assert!(matches!(result, Err(CommentError::EventNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_comments_for_event() {
        let mut repository = MockTestCommentRepository::new();
        repository
            .expect_list_by_event()
            .withf(|event_id| *event_id == EventId(10))
            .times(1)
            .returning(|_| Ok(vec![comment(1, 2), comment(2, 3)]));

        let comments = service(repository, MockTestEventRepository::new())
            .list_comments_for_event(&EventId(10))
            .await
            .unwrap();

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, CommentId(1));
    }

    #[tokio::test]
    async fn test_delete_comment_by_author() {
        let mut repository = MockTestCommentRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(comment(id.0, 2))));
        repository.expect_delete().times(1).returning(|_| Ok(()));

        let result = service(repository, MockTestEventRepository::new())
            .delete_comment(&user(2), &CommentId(1))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_comment_by_other_user_is_forbidden() {
        let mut repository = MockTestCommentRepository::new();
        repository
            .expect_find_by_id()
            .returning(|id| Ok(Some(comment(id.0, 2))));
        repository.expect_delete().times(0);

        let result = service(repository, MockTestEventRepository::new())
            .delete_comment(&user(3), &CommentId(1))
            .await;

        assert!(matches!(result, Err(CommentError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_comment() {
        let mut repository = MockTestCommentRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let result = service(repository, MockTestEventRepository::new())
            .delete_comment(&user(2), &CommentId(1))
            .await;

        assert!(matches!(result, Err(CommentError::NotFound(_))));
    }
}
