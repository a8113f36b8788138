use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::event::errors::EventError;
use crate::domain::event::models::Event;
use crate::domain::event::models::EventId;
use crate::domain::event::models::EventLocation;
use crate::domain::event::models::EventTitle;
use crate::domain::event::models::NewEvent;
use crate::domain::event::ports::EventRepository;
use crate::domain::pagination::Pagination;
use crate::domain::user::models::UserId;

pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_event(row: PgRow) -> Result<Event, EventError> {
        Ok(Event {
            id: EventId(row.get("id")),
            title: EventTitle::new(row.get("title"))?,
            description: row.get("description"),
            date_time: row.get("date_time"),
            location: EventLocation::new(row.get("location"))?,
            creator_id: UserId(row.get("creator_id")),
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn create(&self, event: NewEvent) -> Result<Event, EventError> {
        let row = sqlx::query(
            r#"
            INSERT INTO events (title, description, date_time, location, creator_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, date_time, location, creator_id, created_at
            "#,
        )
        .bind(event.title.as_str())
        .bind(event.description.as_deref())
        .bind(event.date_time)
        .bind(event.location.as_str())
        .bind(event.creator_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        Self::row_to_event(row)
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventError> {
        sqlx::query(
            r#"
            SELECT id, title, description, date_time, location, creator_id, created_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| EventError::DatabaseError(e.to_string()))?
        .map(Self::row_to_event)
        .transpose()
    }

    async fn list(&self, pagination: Pagination) -> Result<Vec<Event>, EventError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, date_time, location, creator_id, created_at
            FROM events
            ORDER BY id
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(pagination.offset())
        .bind(pagination.limit())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_event).collect()
    }

    async fn update(&self, event: Event) -> Result<Event, EventError> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET title = $2, description = $3, date_time = $4, location = $5
            WHERE id = $1
            "#,
        )
        .bind(event.id.0)
        .bind(event.title.as_str())
        .bind(event.description.as_deref())
        .bind(event.date_time)
        .bind(event.location.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(EventError::NotFound(event.id.to_string()));
        }

        Ok(event)
    }

    async fn delete(&self, id: &EventId) -> Result<(), EventError> {
        let result = sqlx::query(
            r#"
            DELETE FROM events
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| EventError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(EventError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
