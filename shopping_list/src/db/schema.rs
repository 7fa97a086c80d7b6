// shopping_list/src/db/schema.rs

use sqlx::PgPool;
use tracing::{error, info, instrument};

use crate::errors::Result;

pub const CREATE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
  id SERIAL PRIMARY KEY,
  name VARCHAR(255) NOT NULL,
  quantity INTEGER NOT NULL DEFAULT 1,
  purchased BOOLEAN NOT NULL DEFAULT FALSE,
  created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// Creates the `items` table when it does not exist yet. Safe to run on every startup.
#[instrument(name = "db::ensure_schema", skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
  sqlx::query(CREATE_ITEMS_TABLE).execute(pool).await.map_err(|e| {
    error!(error = %e, "Failed to initialize the items table.");
    e
  })?;
  info!("Items table is ready.");
  Ok(())
}
