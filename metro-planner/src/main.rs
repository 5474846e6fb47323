use std::error::Error;

use tracing::{info, warn};

use metro_planner::config::ServerConfig;
use metro_planner::loader;
use metro_planner::logging;
use metro_planner::network::Network;
use metro_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init()?;

    let config = ServerConfig::from_env()?;

    // Load the network once; it is read-only from here on
    info!(file = %config.network_file.display(), "Loading network");
    let records = loader::load_file(&config.network_file)?;
    let network = Network::from_records(&records);
    info!(
        stations = network.len(),
        segments = network.segment_count(),
        transfers = network.transfer_stations().len(),
        "Network loaded"
    );

    let state = AppState::new(network, config.planner.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Metro planner listening");
    info!("API Endpoints:");
    info!("  GET  /health                              - Health check");
    info!("  GET  /stations/transfers                  - Transfer stations");
    info!("  GET  /stations/exists/{{name}}              - Station exists?");
    info!("  GET  /stations/nearby?station=&max_km=    - Stations within a radius");
    info!("  GET  /paths?from=&to=                     - All simple paths");
    info!("  GET  /route?from=&to=&fare_class=         - Shortest route, itinerary, fares");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
