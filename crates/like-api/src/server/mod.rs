//! Server setup and initialization
//!
//! Builds every dependency once, wires them into the service context and
//! runs the HTTP server. Any failure here is returned to `main`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use like_common::{AppConfig, AppError, AppResult};
use like_db::{create_pool, run_migrations, DatabaseConfig, PgLikeActionRepository, PgUserProfileRepository};
use like_service::ServiceContextBuilder;
use like_stream::{RedisPool, StreamProducer};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::{AppState, Backends};

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let cors = state.config().cors.clone();
    let is_production = state.config().app.env.is_production();

    let router = create_router();
    let router = apply_middleware(router, &cors, is_production);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create Redis pool and the event producer
    let redis = RedisPool::from_config(&config.redis).map_err(|e| AppError::Broker(e.to_string()))?;
    let mut producer = StreamProducer::new(redis.clone());
    if let Some(max_len) = config.events.max_len {
        producer = producer.with_max_len(max_len);
    }

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .like_repo(Arc::new(PgLikeActionRepository::new(pool.clone())))
        .profile_repo(Arc::new(PgUserProfileRepository::new(pool.clone())))
        .publisher(Arc::new(producer))
        .topic(config.events.topic.clone())
        .build()?;

    let backends = Backends { pool, redis };

    Ok(AppState::new(service_context, config, Arc::new(backends)))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(AppError::internal)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
