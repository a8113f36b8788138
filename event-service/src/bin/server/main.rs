use std::future::Future;
use std::io;
use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use event_service::config::Config;
use event_service::domain::comment::service::CommentService;
use event_service::domain::event::service::EventService;
use event_service::domain::user::service::UserService;
use event_service::inbound::http::router::create_router;
use event_service::outbound::repositories::PostgresCommentRepository;
use event_service::outbound::repositories::PostgresEventRepository;
use event_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "event_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "event-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_algorithm = %config.jwt.algorithm,
        jwt_expiration_minutes = config.jwt.expiration_minutes,
        bcrypt_cost = config.password.bcrypt_cost,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(
        Authenticator::with_algorithm(config.jwt.secret.as_bytes(), config.jwt.algorithm()?)?
            .with_token_lifetime(config.jwt.expiration())
            .with_password_hasher(PasswordHasher::with_cost(config.password.bcrypt_cost)?),
    );

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let event_repository = Arc::new(PostgresEventRepository::new(pg_pool.clone()));
    let comment_repository = Arc::new(PostgresCommentRepository::new(pg_pool.clone()));

    let user_service = Arc::new(UserService::new(user_repository, authenticator));
    let event_service = Arc::new(EventService::new(Arc::clone(&event_repository)));
    let comment_service = Arc::new(CommentService::new(comment_repository, event_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, event_service, comment_service);

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Http server stopped, closing database pool");
    pg_pool.close().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = until_signal(signal::ctrl_c(), "Ctrl-C");

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Resolve once `listener` reports its signal. A listener that cannot be
/// installed never resolves, so it cannot trigger a shutdown by itself.
async fn until_signal<F>(listener: F, name: &str)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = listener.await {
        tracing::error!(error = %e, signal = name, "Failed to listen for signal");
        std::future::pending::<()>().await;
    }
}
