use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::event::errors::EventLocationError;
use crate::domain::event::errors::EventTitleError;
use crate::domain::user::models::UserId;

/// Event aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: EventTitle,
    pub description: Option<String>,
    pub date_time: DateTime<Utc>,
    pub location: EventLocation,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn is_created_by(&self, user_id: &UserId) -> bool {
        self.creator_id == *user_id
    }
}

/// Event unique identifier type, assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub i64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Event title value type
///
/// Surrounding whitespace is trimmed; the result must be 1-200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTitle(String);

impl EventTitle {
    const MAX_LENGTH: usize = 200;

    /// # Errors
    /// * `Blank` - Title is empty or only whitespace
    /// * `TooLong` - Title longer than 200 characters
    pub fn new(title: String) -> Result<Self, EventTitleError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(EventTitleError::Blank);
        }

        let length = title.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(EventTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(title.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Event location value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLocation(String);

impl EventLocation {
    const MAX_LENGTH: usize = 200;

    /// # Errors
    /// * `Blank` - Location is empty or only whitespace
    /// * `TooLong` - Location longer than 200 characters
    pub fn new(location: String) -> Result<Self, EventLocationError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(EventLocationError::Blank);
        }

        let length = location.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(EventLocationError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(location.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Event ready to be persisted; the id and timestamp are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: EventTitle,
    pub description: Option<String>,
    pub date_time: DateTime<Utc>,
    pub location: EventLocation,
    pub creator_id: UserId,
}

/// Command to create a new event
#[derive(Debug)]
pub struct CreateEventCommand {
    pub title: EventTitle,
    pub description: Option<String>,
    pub date_time: DateTime<Utc>,
    pub location: EventLocation,
}

/// Command to update an existing event.
///
/// Only provided fields are changed.
#[derive(Debug, Default)]
pub struct UpdateEventCommand {
    pub title: Option<EventTitle>,
    pub description: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    pub location: Option<EventLocation>,
}

impl UpdateEventCommand {
    /// Apply the provided fields to `event`.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = Some(description);
        }
        if let Some(date_time) = self.date_time {
            event.date_time = date_time;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_trimmed() {
        let title = EventTitle::new("  Rust meetup  ".to_string()).unwrap();
        assert_eq!(title.as_str(), "Rust meetup");
    }

    #[test]
    fn test_title_blank() {
        assert_eq!(EventTitle::new("   ".to_string()), Err(EventTitleError::Blank));
        assert_eq!(EventTitle::new(String::new()), Err(EventTitleError::Blank));
    }

    #[test]
    fn test_title_length_bounds() {
        assert!(EventTitle::new("x".repeat(200)).is_ok());
        assert_eq!(
            EventTitle::new("x".repeat(201)),
            Err(EventTitleError::TooLong {
                max: 200,
                actual: 201
            })
        );
    }

    #[test]
    fn test_location_blank() {
        assert_eq!(
            EventLocation::new("\t".to_string()),
            Err(EventLocationError::Blank)
        );
    }

    #[test]
    fn test_update_applies_only_provided_fields() {
        let mut event = Event {
            id: EventId(1),
            title: EventTitle::new("Old".to_string()).unwrap(),
            description: None,
            date_time: Utc::now(),
            location: EventLocation::new("Berlin".to_string()).unwrap(),
            creator_id: UserId(7),
            created_at: Utc::now(),
        };
        let original_date = event.date_time;

        UpdateEventCommand {
            title: Some(EventTitle::new("New".to_string()).unwrap()),
            description: Some("Now with snacks".to_string()),
            ..Default::default()
        }
        .apply_to(&mut event);

        assert_eq!(event.title.as_str(), "New");
        assert_eq!(event.description.as_deref(), Some("Now with snacks"));
        assert_eq!(event.date_time, original_date);
        assert_eq!(event.location.as_str(), "Berlin");
        assert!(event.is_created_by(&UserId(7)));
        assert!(!event.is_created_by(&UserId(8)));
    }
}
