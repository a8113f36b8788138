use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::NewComment;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::event::models::EventId;
use crate::domain::user::models::UserId;

const EVENT_FOREIGN_KEY: &str = "comments_event_id_fkey";

pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_comment(row: PgRow) -> Result<Comment, CommentError> {
        Ok(Comment {
            id: CommentId(row.get("id")),
            content: CommentContent::new(row.get("content"))?,
            user_id: UserId(row.get("user_id")),
            event_id: EventId(row.get("event_id")),
            created_at: row.get("created_at"),
        })
    }

    fn map_insert_error(e: sqlx::Error, event_id: &EventId) -> CommentError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_foreign_key_violation() {
                return Self::foreign_key_error(db_err.constraint(), event_id, &e);
            }
        }
        CommentError::DatabaseError(e.to_string())
    }

    // The event can vanish between the existence check and the insert.
    // A missing author is not a client error.
    fn foreign_key_error(
        constraint: Option<&str>,
        event_id: &EventId,
        cause: &dyn std::fmt::Display,
    ) -> CommentError {
        match constraint {
            Some(EVENT_FOREIGN_KEY) => CommentError::EventNotFound(event_id.to_string()),
            _ => CommentError::DatabaseError(cause.to_string()),
        }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentError> {
        let row = sqlx::query(
            r#"
            INSERT INTO comments (content, user_id, event_id)
            VALUES ($1, $2, $3)
            RETURNING id, content, user_id, event_id, created_at
            "#,
        )
        .bind(comment.content.as_str())
        .bind(comment.user_id.0)
        .bind(comment.event_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_insert_error(e, &comment.event_id))?;

        Self::row_to_comment(row)
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentError> {
        sqlx::query(
            r#"
            SELECT id, content, user_id, event_id, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?
        .map(Self::row_to_comment)
        .transpose()
    }

    async fn list_by_event(&self, event_id: &EventId) -> Result<Vec<Comment>, CommentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, content, user_id, event_id, created_at
            FROM comments
            WHERE event_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(event_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_comment).collect()
    }

    async fn delete(&self, id: &CommentId) -> Result<(), CommentError> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CommentError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_event_maps_to_event_not_found() {
        let error = PostgresCommentRepository::foreign_key_error(
            Some("comments_event_id_fkey"),
            &EventId(7),
            &"violates foreign key constraint",
        );
        assert!(matches!(error, CommentError::EventNotFound(id) if id == "7"));
    }

    #[test]
    fn test_missing_author_is_a_database_error() {
        for constraint in [Some("comments_user_id_fkey"), None] {
            let error = PostgresCommentRepository::foreign_key_error(
                constraint,
                &EventId(7),
                &"violates foreign key constraint",
            );
            assert!(matches!(error, CommentError::DatabaseError(_)));
        }
    }
}
