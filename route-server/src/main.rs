use route_server::config::ServerConfig;
use route_server::connections::NetworkStore;
use route_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");
    let source = config
        .connection_source()
        .expect("Failed to create connections client");

    // Fetch connections (fail fast if unavailable)
    let store = NetworkStore::load(source)
        .await
        .expect("Failed to load connections");

    // Spawn background task to rebuild the network periodically
    if let Some(period) = config.refresh_interval {
        let store_refresh = store.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // First tick is immediate, skip it
            loop {
                interval.tick().await;
                let source = store_refresh.source().describe();
                match store_refresh.refresh().await {
                    Ok(count) => {
                        info!(%source, connections = count, "refreshed connection network")
                    }
                    Err(e) => error!(%source, error = %e, "failed to refresh connections"),
                }
            }
        });
    }

    let app = create_router(AppState::new(store));

    let addr = config.bind_addr;
    info!("Route planner listening on http://{addr}");
    info!("  GET /health         - Health check");
    info!("  GET /api/locations  - Search locations by title prefix");
    info!("  GET /api/route      - Cheapest route between two locations");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
