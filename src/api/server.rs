use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{config::ApiServerConfig, errors::Error, vault::Vault};

use super::routes::build_router;

/// Binds the configured address and serves until Ctrl-C.
pub async fn start_api_server(config: &ApiServerConfig, vault: Arc<Vault>) -> crate::Result<()> {
    let addr = config.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::transport(format!("Failed to bind API server: {}", e)))?;

    serve(listener, vault, shutdown_signal()).await
}

/// Serves the API on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, vault: Arc<Vault>, shutdown: F) -> crate::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = listener.local_addr()?;
    info!(address = %address, "Starting HTTP API server");

    axum::serve(listener, build_router(vault))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| Error::transport(format!("API server error: {}", e)))?;

    info!("API server shutdown completed");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
