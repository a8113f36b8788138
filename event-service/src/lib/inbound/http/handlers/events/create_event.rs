use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::EventResponseData;
use crate::domain::event::errors::EventError;
use crate::domain::event::models::CreateEventCommand;
use crate::domain::event::models::EventLocation;
use crate::domain::event::models::EventTitle;
use crate::domain::event::ports::EventServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_event(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Json(body): Json<CreateEventRequest>,
) -> Result<ApiSuccess<EventResponseData>, ApiError> {
    state
        .event_service
        .create_event(&current.user, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref event| ApiSuccess::new(StatusCode::CREATED, event.into()))
}

/// HTTP request body for creating an event (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateEventRequest {
    title: String,
    #[serde(default)]
    description: Option<String>,
    date_time: DateTime<Utc>,
    location: String,
}

impl CreateEventRequest {
    fn try_into_command(self) -> Result<CreateEventCommand, EventError> {
        Ok(CreateEventCommand {
            title: EventTitle::new(self.title)?,
            description: self.description,
            date_time: self.date_time,
            location: EventLocation::new(self.location)?,
        })
    }
}
