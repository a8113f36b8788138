use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use super::EventResponseData;
use crate::domain::event::errors::EventError;
use crate::domain::event::models::EventId;
use crate::domain::event::models::EventLocation;
use crate::domain::event::models::EventTitle;
use crate::domain::event::models::UpdateEventCommand;
use crate::domain::event::ports::EventServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an event; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

impl UpdateEventRequest {
    fn try_into_command(self) -> Result<UpdateEventCommand, EventError> {
        Ok(UpdateEventCommand {
            title: self.title.map(EventTitle::new).transpose()?,
            description: self.description,
            date_time: self.date_time,
            location: self.location.map(EventLocation::new).transpose()?,
        })
    }
}

pub async fn update_event(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Path(event_id): Path<i64>,
    Json(body): Json<UpdateEventRequest>,
) -> Result<ApiSuccess<EventResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .event_service
        .update_event(&current.user, &EventId(event_id), command)
        .await
        .map_err(ApiError::from)
        .map(|ref event| ApiSuccess::new(StatusCode::OK, event.into()))
}
