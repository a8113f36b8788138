use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::event::errors::EventError;
use crate::domain::event::models::CreateEventCommand;
use crate::domain::event::models::Event;
use crate::domain::event::models::EventId;
use crate::domain::event::models::NewEvent;
use crate::domain::event::models::UpdateEventCommand;
use crate::domain::event::ports::EventRepository;
use crate::domain::event::ports::EventServicePort;
use crate::domain::pagination::Pagination;
use crate::domain::user::models::User;

/// Domain service implementation for event operations.
pub struct EventService<ER>
where
    ER: EventRepository,
{
    repository: Arc<ER>,
}

impl<ER> EventService<ER>
where
    ER: EventRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }

    async fn owned_event(&self, actor: &User, id: &EventId) -> Result<Event, EventError> {
        let event = self.get_event(id).await?;

        if !event.is_created_by(&actor.id) {
            tracing::warn!(
                event_id = %id,
                creator_id = %event.creator_id,
                actor = %actor.id,
                "Rejected change to event owned by another user"
            );
            return Err(EventError::Forbidden(id.to_string()));
        }

        Ok(event)
    }
}

#[async_trait]
impl<ER> EventServicePort for EventService<ER>
where
    ER: EventRepository,
{
    async fn create_event(
        &self,
        creator: &User,
        command: CreateEventCommand,
    ) -> Result<Event, EventError> {
        let event = self
            .repository
            .create(NewEvent {
                title: command.title,
                description: command.description,
                date_time: command.date_time,
                location: command.location,
                creator_id: creator.id,
            })
            .await?;

        tracing::info!(event_id = %event.id, creator_id = %creator.id, "Event created");

        Ok(event)
    }

    async fn get_event(&self, id: &EventId) -> Result<Event, EventError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id.to_string()))
    }

    async fn list_events(&self, pagination: Pagination) -> Result<Vec<Event>, EventError> {
        self.repository.list(pagination).await
    }

    async fn update_event(
        &self,
        actor: &User,
        id: &EventId,
        command: UpdateEventCommand,
    ) -> Result<Event, EventError> {
        let mut event = self.owned_event(actor, id).await?;
        command.apply_to(&mut event);

        let updated = self.repository.update(event).await?;
        tracing::info!(event_id = %updated.id, "Event updated");

        Ok(updated)
    }

    async fn delete_event(&self, actor: &User, id: &EventId) -> Result<(), EventError> {
        self.owned_event(actor, id).await?;

        self.repository.delete(id).await?;
        tracing::info!(event_id = %id, "Event deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::event::models::EventLocation;
    use crate::domain::event::models::EventTitle;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;

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

    fn event(id: i64, creator: i64) -> Event {
        Event {
            id: EventId(id),
            title: EventTitle::new("Rust meetup".to_string()).unwrap(),
            description: None,
            date_time: Utc::now(),
            location: EventLocation::new("Berlin".to_string()).unwrap(),
            creator_id: UserId(creator),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_event_sets_creator() {
        let mut repository = MockTestEventRepository::new();
        repository
            .expect_create()
            .withf(|event| event.creator_id == UserId(1) && event.title.as_str() == "Rust meetup")
            .times(1)
            .returning(|new_event| {
                Ok(Event {
                    id: EventId(10),
                    title: new_event.title,
                    description: new_event.description,
                    date_time: new_event.date_time,
                    location: new_event.location,
                    creator_id: new_event.creator_id,
                    created_at: Utc::now(),
                })
            });

        let service = EventService::new(Arc::new(repository));
        let command = CreateEventCommand {
            title: EventTitle::new("Rust meetup".to_string()).unwrap(),
            description: Some("Talks and pizza".to_string()),
            date_time: Utc::now(),
            location: EventLocation::new("Berlin".to_string()).unwrap(),
        };

        let created = service.create_event(&user(1), command).await.unwrap();
        assert_eq!(created.id, EventId(10));
        assert_eq!(created.creator_id, UserId(1));
    }

    #[tokio::test]
    async fn test_get_event_not_found() {
        let mut repository = MockTestEventRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let service = EventService::new(Arc::new(repository));
        let result = service.get_event(&EventId(99)).await;

        assert!(matches!(result, Err(EventError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_event_by_creator() {
        let mut repository = MockTestEventRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(event(10, 1))));
        repository
            .expect_update()
            .withf(|event| event.location.as_str() == "Lisbon" && event.title.as_str() == "Rust meetup")
            .times(1)
            .returning(|event| Ok(event));

        let service = EventService::new(Arc::new(repository));
        let command = UpdateEventCommand {
            location: Some(EventLocation::new("Lisbon".to_string()).unwrap()),
            ..Default::default()
        };

        let updated = service
            .update_event(&user(1), &EventId(10), command)
            .await
            .unwrap();
        assert_eq!(updated.location.as_str(), "Lisbon");
    }

    #[tokio::test]
    async fn test_update_event_by_other_user_is_forbidden() {
        let mut repository = MockTestEventRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(event(10, 1))));
        repository.expect_update().times(0);

        let service = EventService::new(Arc::new(repository));
        let result = service
            .update_event(&user(2), &EventId(10), UpdateEventCommand::default())
            .await;

        assert!(matches!(result, Err(EventError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_update_missing_event_is_not_found() {
        let mut repository = MockTestEventRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = EventService::new(Arc::new(repository));
        let result = service
            .update_event(&user(1), &EventId(10), UpdateEventCommand::default())
            .await;

        assert!(matches!(result, Err(EventError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_event_by_creator() {
        let mut repository = MockTestEventRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(event(10, 1))));
        repository
            .expect_delete()
            .withf(|id| *id == EventId(10))
            .times(1)
            .returning(|_| Ok(()));

        let service = EventService::new(Arc::new(repository));
        assert!(service.delete_event(&user(1), &EventId(10)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_event_by_other_user_is_forbidden() {
        let mut repository = MockTestEventRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(event(10, 1))));
        repository.expect_delete().times(0);

        let service = EventService::new(Arc::new(repository));
        let result = service.delete_event(&user(2), &EventId(10)).await;

        assert!(matches!(result, Err(EventError::Forbidden(_))));
    }
}
