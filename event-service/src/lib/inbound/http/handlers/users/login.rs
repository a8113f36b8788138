use axum::async_trait;
use axum::extract::FromRequest;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::Form;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginIdentifier;
use crate::domain::user::models::Password;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// Exchange credentials for a bearer token.
///
/// Accepts either a JSON body `{username, password}` or an OAuth2 password
/// form (`application/x-www-form-urlencoded`) with an optional `email`.
pub async fn login(
    State(state): State<AppState>,
    request: LoginRequest,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let user = state
        .user_service
        .authenticate(&request.identifier, &request.password)
        .await?;

    state
        .user_service
        .issue_token(&user)
        .await
        .map_err(ApiError::from)
        .map(|token| {
            ApiSuccess::new(
                StatusCode::OK,
                LoginResponseData {
                    access_token: token.token,
                    token_type: token.token_type.to_string(),
                },
            )
        })
}

/// Validated login attempt, extracted from JSON or form bodies.
#[derive(Debug)]
pub struct LoginRequest {
    pub identifier: LoginIdentifier,
    pub password: Password,
}

#[derive(Debug, Deserialize)]
struct JsonLoginBody {
    username: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct FormLoginBody {
    #[serde(default)]
    username: Option<String>,
    password: String,
    #[serde(default)]
    email: Option<String>,
}

impl LoginRequest {
    fn from_json(body: JsonLoginBody) -> Result<Self, UserError> {
        Self::with_username(body.username, body.password)
    }

    fn from_form(body: FormLoginBody) -> Result<Self, UserError> {
        let username = body.username.filter(|u| !u.is_empty());
        let email = body.email.filter(|e| !e.is_empty());

        match (username, email) {
            (Some(username), _) => Self::with_username(username, body.password),
            (None, Some(email)) => Ok(Self {
                identifier: LoginIdentifier::Email(
                    EmailAddress::new(email).map_err(|_| UserError::InvalidCredentials)?,
                ),
                password: Self::password(body.password)?,
            }),
            (None, None) => Err(UserError::InvalidCredentials),
        }
    }

    // Malformed identifiers can never match an account, so they are
    // rejected exactly like an unknown one.
    fn with_username(username: String, password: String) -> Result<Self, UserError> {
        Ok(Self {
            identifier: LoginIdentifier::Username(
                Username::new(username).map_err(|_| UserError::InvalidCredentials)?,
            ),
            password: Self::password(password)?,
        })
    }

    fn password(password: String) -> Result<Password, UserError> {
        Password::new(password).map_err(|_| UserError::InvalidCredentials)
    }
}

#[async_trait]
impl<S> FromRequest<S> for LoginRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        let request = if is_form {
            let Form(body) = Form::<FormLoginBody>::from_request(req, state)
                .await
                .map_err(|e| ApiError::UnprocessableEntity(e.body_text()))?;
            LoginRequest::from_form(body)?
        } else {
            let Json(body) = Json::<JsonLoginBody>::from_request(req, state)
                .await
                .map_err(|e| ApiError::UnprocessableEntity(e.body_text()))?;
            LoginRequest::from_json(body)?
        };

        Ok(request)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
}
