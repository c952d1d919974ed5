//! Flowscreen API Server
//!
//! Accepts daily exchange exports, keeps them in an in-memory store and serves
//! the streak detector and technical screener over HTTP.

use dotenvy::dotenv;
use flowscreen::config::AppConfig;
use flowscreen::core::http::start_server;
use flowscreen::logging::{self, LogTarget};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = AppConfig::from_env();
    logging::init_logging(&config.environment, LogTarget::Stdout);

    let port = config.port;
    info!("Starting Flowscreen API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = port, fetch_limit = config.fetch_limit, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
