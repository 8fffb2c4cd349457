use bus_server::catalog::demo_catalog;
use bus_server::config::ServerConfig;
use bus_server::logging::init_logger;
use bus_server::persist::RouteStore;
use bus_server::web::{AppState, create_router};
use tracing::info;

#[tokio::main]
async fn main() {
    init_logger();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    let store = RouteStore::new(&config.routes_file);
    // An unreadable routes file stops startup; edits would overwrite it
    let catalog = store
        .load_or_seed(demo_catalog)
        .expect("Failed to load routes file");
    info!(routes = catalog.len(), "Route catalog ready");

    // Build app state
    let state = AppState::new(catalog, config.planner.clone(), store);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = config.listen_addr;
    info!("Bus planner listening on http://{addr}");
    info!("  GET    /health          - Health check");
    info!("  GET    /api/stops       - Stop name suggestions");
    info!("  GET    /journey/plan    - Plan itineraries");
    info!("  GET    /routes          - List routes");
    info!("  POST   /routes          - Add a route");
    info!("  PUT    /routes/:id      - Edit a route");
    info!("  DELETE /routes/:id      - Remove a route");
    info!("  GET    /routes/export   - Download routes");
    info!("  POST   /routes/import   - Import routes");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
