use axum::http::StatusCode;
use axum::Extension;

use super::UserResponseData;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

pub async fn get_current_user(
    Extension(current): Extension<AuthenticatedUser>,
) -> ApiSuccess<UserResponseData> {
    ApiSuccess::new(StatusCode::OK, (&current.user).into())
}
