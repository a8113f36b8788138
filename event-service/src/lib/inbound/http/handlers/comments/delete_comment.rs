use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::comment::models::CommentId;
use crate::domain::comment::ports::CommentServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedUser>,
    Path(comment_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .comment_service
        .delete_comment(&current.user, &CommentId(comment_id))
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
