use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use todo_read_http::{AppState, create_router};

use crate::{open_backend, query_service};

pub(crate) async fn run(port: u16, host: String, seed: Option<PathBuf>) -> Result<()> {
    let backend = open_backend(seed.as_deref()).await?;
    let backend_name = backend.name();
    tracing::info!("Using {} storage backend", backend_name);

    let state = Arc::new(AppState {
        query_service: Arc::new(query_service(backend)),
        backend: backend_name,
    });

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
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
