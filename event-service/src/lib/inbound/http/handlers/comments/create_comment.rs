use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::CommentResponseData;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::CommentContent;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::event::models::EventId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_comment(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<ApiSuccess<CommentResponseData>, ApiError> {
    state
        .comment_service
        .create_comment(&current.user, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::CREATED, comment.into()))
}

/// HTTP request body for posting a comment (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCommentRequest {
    content: String,
    event_id: i64,
}

impl CreateCommentRequest {
    fn try_into_command(self) -> Result<CreateCommentCommand, CommentError> {
        Ok(CreateCommentCommand {
            content: CommentContent::new(self.content)?,
            event_id: EventId(self.event_id),
        })
    }
}
