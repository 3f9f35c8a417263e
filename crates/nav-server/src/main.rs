// ============================================================================
// Navigation Server - Entry Point
// File: crates/nav-server/src/main.rs
// Description: Wires configuration, telemetry, store, service and HTTP router
// ============================================================================

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use nav_api::{build_router, build_schema, AppState};
use nav_core::repositories::{NavigationItemRepository, NavigationTreeRepository};
use nav_core::services::NavigationService;
use nav_infrastructure::InMemoryNavigationStore;
use nav_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize telemetry; the guard flushes file logs on exit
    let _log_guard = nav_shared::telemetry::init_telemetry(&config.logging)?;

    info!("{} starting ({} environment)...", config.app.name, config.app.env);

    // Storage and service
    let store = Arc::new(InMemoryNavigationStore::new());
    let item_repo: Arc<dyn NavigationItemRepository> = store.clone();
    let tree_repo: Arc<dyn NavigationTreeRepository> = store;
    let service = Arc::new(NavigationService::new(
        item_repo,
        tree_repo,
        config.navigation.clone(),
    ));

    // Build router
    let schema = build_schema(service, &config.graphql);
    let app = build_router(AppState {
        schema,
        config: config.clone(),
    });

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {} (GraphQL at {})", addr, config.graphql.path);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
