use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;
use uuid::Uuid;

use super::handlers::comments;
use super::handlers::events;
use super::handlers::users;
use super::middleware::authenticate as auth_middleware;
use crate::domain::comment::ports::CommentServicePort;
use crate::domain::event::ports::EventServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub event_service: Arc<dyn EventServicePort>,
    pub comment_service: Arc<dyn CommentServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    event_service: Arc<dyn EventServicePort>,
    comment_service: Arc<dyn CommentServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        event_service,
        comment_service,
    };

    let public_routes = Router::new()
        .route("/users/register", post(users::register))
        .route("/users/login", post(users::login))
        .route("/users", get(users::list_users))
        .route("/users/:user_id", get(users::get_user))
        .route("/events", get(events::list_events))
        .route("/events/:event_id", get(events::get_event))
        .route(
            "/comments/event/:event_id",
            get(comments::list_event_comments),
        );

    let protected_routes = Router::new()
        .route("/users/me", get(users::get_current_user))
        .route(
            "/users/:user_id",
            put(users::update_user).delete(users::delete_user),
        )
        .route("/events", post(events::create_event))
        .route(
            "/events/:event_id",
            put(events::update_event).delete(events::delete_event),
        )
        .route("/comments", post(comments::create_comment))
        .route(
            "/comments/:comment_id",
            delete(comments::delete_comment),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                request_id = %Uuid::new_v4(),
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
