use std::sync::Arc;

use http::HeaderName;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use shipment_tracker::adapters::http::{api_router, ShipmentAppState};
use shipment_tracker::adapters::postgres::{self, PostgresShipmentReader, PostgresShipmentRepository};
use shipment_tracker::adapters::tracking::RandomTrackingNumbers;
use shipment_tracker::config::AppConfig;
use shipment_tracker::telemetry;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    telemetry::init_tracing(&config.server);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Configuration validation failed");
        return Err(e.into());
    }

    tracing::info!(
        environment = ?config.server.environment,
        "Starting shipment-tracker"
    );

    let pool = postgres::connect(&config.database).await?;
    if config.database.run_migrations {
        postgres::run_migrations(&pool).await?;
    }

    let state = ShipmentAppState::new(
        Arc::new(PostgresShipmentRepository::new(pool.clone())),
        Arc::new(PostgresShipmentReader::new(pool.clone())),
        Arc::new(RandomTrackingNumbers::new()),
        config.shipments.page_size_policy(),
    );

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let app = api_router(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for shutdown signal"),
    }
}
