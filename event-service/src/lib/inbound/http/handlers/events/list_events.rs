use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;

use super::EventResponseData;
use crate::domain::event::ports::EventServicePort;
use crate::domain::pagination::Pagination;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_events(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<ApiSuccess<Vec<EventResponseData>>, ApiError> {
    state
        .event_service
        .list_events(pagination)
        .await
        .map_err(ApiError::from)
        .map(|events| ApiSuccess::new(StatusCode::OK, events.iter().map(Into::into).collect()))
}
