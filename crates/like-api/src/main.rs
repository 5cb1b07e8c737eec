//! Like API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p like-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use like_common::{try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration before tracing so the log format can follow APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, code = e.error_code(), "Server failed to start");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        topic = %config.events.topic,
        "Starting Like API Server..."
    );

    like_api::run(config).await
}
