use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::event::models::Event;

pub mod create_event;
pub mod delete_event;
pub mod get_event;
pub mod list_events;
pub mod update_event;

pub use create_event::create_event;
pub use delete_event::delete_event;
pub use get_event::get_event;
pub use list_events::list_events;
pub use update_event::update_event;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventResponseData {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub creator_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Event> for EventResponseData {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.0,
            title: event.title.as_str().to_string(),
            description: event.description.clone(),
            date_time: event.date_time,
            location: event.location.as_str().to_string(),
            creator_id: event.creator_id.0,
            created_at: event.created_at,
        }
    }
}
