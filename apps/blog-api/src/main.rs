//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use blog_api::telemetry::{TelemetryConfig, init_telemetry};
use blog_api::{AppConfig, AppState, build_server};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting Blog API Server on {}:{}", config.host, config.port);

    let state = AppState::new(config.database.as_ref()).await;

    let (server, addrs) = build_server(&config, state)?;
    tracing::info!(?addrs, "Listening");

    server.await?;
    Ok(())
}
