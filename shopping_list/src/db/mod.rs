// shopping_list/src/db/mod.rs

//! PostgreSQL access: pool construction, schema bootstrap and the item store.

pub mod item_store;
pub mod schema;

pub use item_store::{ItemStore, PgItemStore};
pub use schema::ensure_schema;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::config::AppConfig;

/// Builds the shared pool without opening a connection. Connections are made
/// on first use, so an unreachable database surfaces as request errors
/// rather than a startup failure.
pub fn build_pool(config: &AppConfig) -> PgPool {
  PgPoolOptions::new()
    .max_connections(config.db_max_connections)
    .acquire_timeout(Duration::from_millis(config.db_acquire_timeout_ms))
    .connect_lazy_with(config.connect_options())
}

/// Startup sequence: pool, then schema. A failed schema bootstrap is logged
/// and the store is returned anyway; later calls report store errors.
pub async fn init_store(config: &AppConfig) -> PgItemStore {
  let pool = build_pool(config);

  if let Err(e) = ensure_schema(&pool).await {
    tracing::error!(error = %e, "Schema initialization failed; continuing without it.");
  }

  PgItemStore::new(pool)
}
