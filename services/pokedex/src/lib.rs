//! Pokedex - host service
//!
//! Serves the server-rendered document shell and the compiled client bundle.

pub mod config;
pub mod error;
pub mod server;

pub use config::{load_config, Config};
pub use error::{PokedexError, Result};

use tokio_util::sync::CancellationToken;

/// Run the pokedex host with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let cancel = CancellationToken::new();
    let addr = config.server.socket_addr();
    let router = server::build_router(&config);

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| PokedexError::Server(format!("Failed to bind {}: {}", addr, e)))?;
    tracing::info!("Pokedex listening on http://{}", addr);
    tracing::debug!("Serving site files from {:?}", config.site.site_root);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Pokedex stopped");
    Ok(())
}
