use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::CommentResponseData;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::event::models::EventId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_event_comments(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<ApiSuccess<Vec<CommentResponseData>>, ApiError> {
    state
        .comment_service
        .list_comments_for_event(&EventId(event_id))
        .await
        .map_err(ApiError::from)
        .map(|comments| ApiSuccess::new(StatusCode::OK, comments.iter().map(Into::into).collect()))
}
