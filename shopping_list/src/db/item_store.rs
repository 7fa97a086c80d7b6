// shopping_list/src/db/item_store.rs

//! Data access for shopping items.
//!
//! Every operation is one parameterized statement. Values only ever reach
//! PostgreSQL as bound parameters.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::errors::Result;
use crate::models::{Item, ItemChanges, ItemStats, NewItem};

/// Persistence seam for items. Handlers only see this trait, so tests can
/// hand them an in-memory store.
#[async_trait]
pub trait ItemStore: Send + Sync {
  /// Unpurchased first, newest first within each group.
  async fn list(&self) -> Result<Vec<Item>>;

  async fn get(&self, id: i32) -> Result<Option<Item>>;

  async fn create(&self, new_item: NewItem) -> Result<Item>;

  /// Applies only the supplied fields. `None` when no row has `id`.
  async fn update(&self, id: i32, changes: ItemChanges) -> Result<Option<Item>>;

  /// Hard delete. Returns the removed row, or `None` when no row has `id`.
  async fn delete(&self, id: i32) -> Result<Option<Item>>;

  async fn stats(&self) -> Result<ItemStats>;
}

const ITEM_COLUMNS: &str = "id, name, quantity, purchased, created_at";

#[derive(Clone)]
pub struct PgItemStore {
  pool: PgPool,
}

impl PgItemStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ItemStore for PgItemStore {
  #[instrument(name = "item_store::list", skip(self))]
  async fn list(&self) -> Result<Vec<Item>> {
    let items: Vec<Item> = sqlx::query_as(&format!(
      "SELECT {ITEM_COLUMNS} FROM items ORDER BY purchased ASC, created_at DESC, id DESC"
    ))
    .fetch_all(&self.pool)
    .await?;
    debug!(count = items.len(), "Fetched items.");
    Ok(items)
  }

  #[instrument(name = "item_store::get", skip(self))]
  async fn get(&self, id: i32) -> Result<Option<Item>> {
    let item = sqlx::query_as(&format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(item)
  }

  #[instrument(name = "item_store::create", skip(self))]
  async fn create(&self, new_item: NewItem) -> Result<Item> {
    let item = sqlx::query_as(&format!(
      "INSERT INTO items (name, quantity) VALUES ($1, $2) RETURNING {ITEM_COLUMNS}"
    ))
    .bind(new_item.name)
    .bind(new_item.quantity)
    .fetch_one(&self.pool)
    .await?;
    Ok(item)
  }

  #[instrument(name = "item_store::update", skip(self))]
  async fn update(&self, id: i32, changes: ItemChanges) -> Result<Option<Item>> {
    let item = sqlx::query_as(&format!(
      r#"
      UPDATE items
      SET name = COALESCE($1, name),
          quantity = COALESCE($2, quantity),
          purchased = COALESCE($3, purchased)
      WHERE id = $4
      RETURNING {ITEM_COLUMNS}
      "#
    ))
    .bind(changes.name)
    .bind(changes.quantity)
    .bind(changes.purchased)
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;
    Ok(item)
  }

  #[instrument(name = "item_store::delete", skip(self))]
  async fn delete(&self, id: i32) -> Result<Option<Item>> {
    let item = sqlx::query_as(&format!("DELETE FROM items WHERE id = $1 RETURNING {ITEM_COLUMNS}"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(item)
  }

  #[instrument(name = "item_store::stats", skip(self))]
  async fn stats(&self) -> Result<ItemStats> {
    let stats = sqlx::query_as(
      r#"
      SELECT COUNT(*) AS total,
             COUNT(*) FILTER (WHERE purchased) AS purchased,
             COUNT(*) FILTER (WHERE NOT purchased) AS pending
      FROM items
      "#,
    )
    .fetch_one(&self.pool)
    .await?;
    Ok(stats)
  }
}
