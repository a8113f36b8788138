use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::EventResponseData;
use crate::domain::event::models::EventId;
use crate::domain::event::ports::EventServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<ApiSuccess<EventResponseData>, ApiError> {
    state
        .event_service
        .get_event(&EventId(event_id))
        .await
        .map_err(ApiError::from)
        .map(|ref event| ApiSuccess::new(StatusCode::OK, event.into()))
}
