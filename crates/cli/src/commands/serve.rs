use anyhow::{Context, Result};
use dinefind_http::{AppState, create_router};
use dinefind_service::RecommendService;
use std::path::PathBuf;
use std::sync::Arc;

pub(crate) async fn run(port: u16, host: String, data_path: PathBuf) -> Result<()> {
    let service = RecommendService::load(&data_path)
        .with_context(|| format!("failed to load restaurant table from {}", data_path.display()))?;
    let stats = service.stats();
    tracing::info!(
        restaurants = stats.restaurant_count,
        cities = stats.cities.len(),
        "Restaurant table ready"
    );

    let state = Arc::new(AppState::new(Arc::new(service)));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("HTTP server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
