use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Extension type carrying the caller resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Middleware that resolves the bearer token to a user and adds it to request extensions
///
/// Any token problem is a 401 with a `WWW-Authenticate: Bearer` challenge.
/// Storage failures during resolution stay 500s.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)
        .map_err(IntoResponse::into_response)?
        .to_string();

    let user = state
        .user_service
        .resolve_identity(&token)
        .await
        .map_err(|e| {
            if matches!(e, UserError::Unauthenticated) {
                tracing::warn!(uri = %req.uri(), "Bearer token rejected");
            }
            ApiError::from(e).into_response()
        })?;

    tracing::debug!(user_id = %user.id, username = %user.username, "Request authenticated");
    req.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, ApiError> {
    let unauthenticated = || ApiError::from(UserError::Unauthenticated);

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(unauthenticated)?;

    let auth_str = auth_header.to_str().map_err(|_| unauthenticated())?;

    let (scheme, token) = auth_str.split_once(' ').ok_or_else(unauthenticated)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(unauthenticated());
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(unauthenticated());
    }

    Ok(token)
}
