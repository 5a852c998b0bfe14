use bb_auth::{JwtValidator, TokenVerifier};
use bb_config::{Config, logger};
use bb_gateway::{GatewayState, RouteTable, build_router};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting bb-gateway v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let validator = JwtValidator::with_hs256(config.auth.require_jwt_secret()?);
    info!(
        "JWT: {} verification enabled (tokens issued for {:?})",
        validator.algorithm(),
        config.auth.token_lifetime()?
    );
    let verifier: Arc<dyn TokenVerifier> = Arc::new(validator);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.gateway.upstream_timeout_secs))
        .build()?;

    let routes = RouteTable::from_config(&config.gateway.routes);
    info!("Route table compiled ({} routes)", routes.len());

    let app = build_router(GatewayState::new(routes, verifier, client));

    let listener = TcpListener::bind(config.gateway.bind_addr()).await?;
    info!("Gateway listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
