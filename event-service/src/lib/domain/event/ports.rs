use async_trait::async_trait;

use crate::domain::event::errors::EventError;
use crate::domain::event::models::CreateEventCommand;
use crate::domain::event::models::Event;
use crate::domain::event::models::EventId;
use crate::domain::event::models::NewEvent;
use crate::domain::event::models::UpdateEventCommand;
use crate::domain::pagination::Pagination;
use crate::domain::user::models::User;

/// Port for event domain service operations.
#[async_trait]
pub trait EventServicePort: Send + Sync + 'static {
    /// Create an event owned by `creator`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_event(
        &self,
        creator: &User,
        command: CreateEventCommand,
    ) -> Result<Event, EventError>;

    /// Retrieve event by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Event does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_event(&self, id: &EventId) -> Result<Event, EventError>;

    /// List events ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_events(&self, pagination: Pagination) -> Result<Vec<Event>, EventError>;

    /// Update an event on behalf of `actor`.
    ///
    /// # Errors
    /// * `NotFound` - Event does not exist
    /// * `Forbidden` - `actor` did not create the event
    /// * `DatabaseError` - Database operation failed
    async fn update_event(
        &self,
        actor: &User,
        id: &EventId,
        command: UpdateEventCommand,
    ) -> Result<Event, EventError>;

    /// Delete an event and its comments on behalf of `actor`.
    ///
    /// # Errors
    /// * `NotFound` - Event does not exist
    /// * `Forbidden` - `actor` did not create the event
    /// * `DatabaseError` - Database operation failed
    async fn delete_event(&self, actor: &User, id: &EventId) -> Result<(), EventError>;
}

/// Persistence operations for event aggregate.
#[async_trait]
pub trait EventRepository: Send + Sync + 'static {
    async fn create(&self, event: NewEvent) -> Result<Event, EventError>;

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventError>;

    async fn list(&self, pagination: Pagination) -> Result<Vec<Event>, EventError>;

    /// # Errors
    /// * `NotFound` - Event does not exist
    async fn update(&self, event: Event) -> Result<Event, EventError>;

    /// Remove event from storage together with its comments.
    ///
    /// # Errors
    /// * `NotFound` - Event does not exist
    async fn delete(&self, id: &EventId) -> Result<(), EventError>;
}
