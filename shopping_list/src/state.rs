// shopping_list/src/state.rs
use crate::db::ItemStore;
use std::sync::Arc;

/// Shared with every handler through `web::Data`. Holds no item state of its
/// own; the store is the only dependency.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn ItemStore>,
}

impl AppState {
  pub fn new(store: Arc<dyn ItemStore>) -> Self {
    Self { store }
  }
}
