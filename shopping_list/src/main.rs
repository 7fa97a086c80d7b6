// shopping_list/src/main.rs

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use shopping_list::db;
use shopping_list::{web, AppConfig, AppState};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))) // RUST_LOG overrides the INFO default
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting shopping list server...");

  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  tracing::debug!(config = ?app_config, "Loaded config details");

  let app_state = AppState::new(Arc::new(db::init_store(&app_config).await));
  let cors_origins = app_config.cors_origins.clone();

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  let server = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(web::cors_layer(&cors_origins))
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?;

  tracing::info!("Shopping list server listening on http://{}", server_address);
  server.run().await.context("Server terminated with an error")
}
