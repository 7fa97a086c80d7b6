// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use shopping_list::db::ItemStore;
use shopping_list::models::{Item, ItemChanges, ItemStats, NewItem};
use shopping_list::{AppError, AppState, Result};
use std::sync::Arc;
use tracing::Level;

// --- In-memory store standing in for PostgreSQL ---
#[derive(Default)]
pub struct InMemoryItemStore {
  inner: Mutex<InMemoryTable>,
}

#[derive(Default)]
struct InMemoryTable {
  next_id: i32,
  rows: Vec<Item>,
}

impl InMemoryItemStore {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn len(&self) -> usize {
    self.inner.lock().rows.len()
  }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
  async fn list(&self) -> Result<Vec<Item>> {
    let mut rows = self.inner.lock().rows.clone();
    // Same ordering as the SQL: purchased ASC, created_at DESC, id DESC.
    rows.sort_by(|a, b| {
      a.purchased
        .cmp(&b.purchased)
        .then(b.created_at.cmp(&a.created_at))
        .then(b.id.cmp(&a.id))
    });
    Ok(rows)
  }

  async fn get(&self, id: i32) -> Result<Option<Item>> {
    Ok(self.inner.lock().rows.iter().find(|item| item.id == id).cloned())
  }

  async fn create(&self, new_item: NewItem) -> Result<Item> {
    let mut table = self.inner.lock();
    table.next_id += 1;
    let item = Item {
      id: table.next_id,
      name: new_item.name,
      quantity: new_item.quantity,
      purchased: false,
      created_at: Utc::now(),
    };
    table.rows.push(item.clone());
    Ok(item)
  }

  async fn update(&self, id: i32, changes: ItemChanges) -> Result<Option<Item>> {
    let mut table = self.inner.lock();
    let Some(item) = table.rows.iter_mut().find(|item| item.id == id) else {
      return Ok(None);
    };
    if let Some(name) = changes.name {
      item.name = name;
    }
    if let Some(quantity) = changes.quantity {
      item.quantity = quantity;
    }
    if let Some(purchased) = changes.purchased {
      item.purchased = purchased;
    }
    Ok(Some(item.clone()))
  }

  async fn delete(&self, id: i32) -> Result<Option<Item>> {
    let mut table = self.inner.lock();
    let position = table.rows.iter().position(|item| item.id == id);
    Ok(position.map(|idx| table.rows.remove(idx)))
  }

  async fn stats(&self) -> Result<ItemStats> {
    let table = self.inner.lock();
    let total = table.rows.len() as i64;
    let purchased = table.rows.iter().filter(|item| item.purchased).count() as i64;
    Ok(ItemStats {
      total,
      purchased,
      pending: total - purchased,
    })
  }
}

// --- Store whose every call fails, as an unreachable database would ---
pub struct FailingItemStore;

fn unreachable_store() -> AppError {
  AppError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ItemStore for FailingItemStore {
  async fn list(&self) -> Result<Vec<Item>> {
    Err(unreachable_store())
  }

  async fn get(&self, _id: i32) -> Result<Option<Item>> {
    Err(unreachable_store())
  }

  async fn create(&self, _new_item: NewItem) -> Result<Item> {
    Err(unreachable_store())
  }

  async fn update(&self, _id: i32, _changes: ItemChanges) -> Result<Option<Item>> {
    Err(unreachable_store())
  }

  async fn delete(&self, _id: i32) -> Result<Option<Item>> {
    Err(unreachable_store())
  }

  async fn stats(&self) -> Result<ItemStats> {
    Err(unreachable_store())
  }
}

// --- App wired the same way main.rs does it ---
pub fn test_app(
  store: Arc<dyn ItemStore>,
) -> App<
  impl ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
    InitError = (),
  >,
> {
  App::new()
    .app_data(web::Data::new(AppState::new(store)))
    .wrap(shopping_list::web::cors_layer(&[]))
    .configure(shopping_list::web::configure_app_routes)
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
