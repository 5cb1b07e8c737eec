//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the configuration and the probe behind the readiness endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use like_common::AppConfig;
use like_db::PgPool;
use like_service::ServiceContext;
use like_stream::RedisPool;

/// Reports whether the backing stores can serve requests
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    async fn database_healthy(&self) -> bool;
    async fn redis_healthy(&self) -> bool;
}

/// The live PostgreSQL and Redis pools
#[derive(Clone)]
pub struct Backends {
    pub pool: PgPool,
    pub redis: RedisPool,
}

#[async_trait]
impl ReadinessProbe for Backends {
    async fn database_healthy(&self) -> bool {
        self.pool.acquire().await.is_ok()
    }

    async fn redis_healthy(&self) -> bool {
        self.redis.health_check().await.is_ok()
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Readiness checks
    probe: Arc<dyn ReadinessProbe>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        probe: Arc<dyn ReadinessProbe>,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            probe,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the readiness probe
    pub fn probe(&self) -> &dyn ReadinessProbe {
        self.probe.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("config", &"AppConfig")
            .finish()
    }
}
