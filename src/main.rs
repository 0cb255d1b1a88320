//! cquiz · C Programming Quiz Backend
//!
//! - Axum HTTP + WebSocket API around the question engine
//! - Static SPA fallback (<static_dir>/index.html)
//!
//! Important env variables:
//!   PORT             : u16 (default 3000)
//!   QUIZ_CONFIG_PATH : path to TOML config (engine seed + server settings)
//!   QUIZ_RNG_SEED    : u64, overrides engine.rng_seed
//!   LOG_LEVEL        : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT       : "pretty" (default) or "json"

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use cquiz_backend::config::load_config_from_env;
use cquiz_backend::routes::build_router;
use cquiz_backend::state::AppState;
use cquiz_backend::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  telemetry::init_tracing()?;

  let config = load_config_from_env();

  // Shared state: seeded generator + quiz store.
  let state = Arc::new(AppState::new(config));

  let app = build_router(state.clone());

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "cquiz_backend", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(target: "cquiz_backend", error = %e, "Failed to listen for ctrl-c; running until killed");
    std::future::pending::<()>().await;
  }
  info!(target: "cquiz_backend", "Shutdown requested");
}
