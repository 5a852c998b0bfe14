use bb_auth::HeaderTrust;
use bb_config::{Config, logger};
use bb_db::{OrderRepository, RestaurantRepository};
use bb_events::{EventPublisher, InMemoryBroker, NotificationListener, OrderEvents};
use bb_server::{AppState, build_router, trust_zone_from};

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

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

    info!("Starting bb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Event broker and the notification consumer
    let broker = InMemoryBroker::new(config.broker.channel_capacity);
    let receiver = broker.subscribe(&config.broker.order_topic).await;
    tokio::spawn(NotificationListener::new().run(receiver));

    let publisher: Arc<dyn EventPublisher> = Arc::new(broker);
    let events = OrderEvents::new(publisher, config.broker.order_topic.clone());

    let zone = trust_zone_from(&config.trust)?;
    info!("Trusting identity headers from zone '{}'", zone.name());

    let state = AppState::new(
        RestaurantRepository::new(),
        OrderRepository::new(),
        events,
        HeaderTrust::new(zone),
    );

    let app = build_router(state);

    let listener = TcpListener::bind(config.server.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Peer addresses feed the trust-zone check
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
