//! Folio HTTP server
//!
//! Serves the home, listing, and detail pages plus stored media assets.

pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;

use anyhow::Context;

/// Bind the given address and serve requests until shutdown
pub async fn serve(state: AppState, addr: &str) -> anyhow::Result<()> {
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(addr = %listener.local_addr()?, "Serving portfolio site");
    axum::serve(listener, app).await?;
    Ok(())
}
