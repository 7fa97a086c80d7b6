// tests/startup_tests.rs
mod common;
use actix_web::http::StatusCode;
use actix_web::test;
use common::*;
use serde_json::{json, Value};
use shopping_list::db::{init_store, ItemStore};
use shopping_list::AppConfig;
use std::sync::Arc;

// Nothing listens on port 1, so every connection attempt is refused.
fn unreachable_database_config() -> AppConfig {
  AppConfig::from_lookup(|name| match name {
    "DB_HOST" => Some("127.0.0.1".to_string()),
    "DB_PORT" => Some("1".to_string()),
    "DB_ACQUIRE_TIMEOUT_MS" => Some("300".to_string()),
    _ => None,
  })
  .unwrap()
}

#[actix_web::test]
async fn test_failed_schema_init_still_yields_a_serving_store() {
  setup_tracing();
  let store = init_store(&unreachable_database_config()).await;

  // The store exists but every call reports the database failure.
  assert!(store.stats().await.is_err());

  let app = test::init_service(test_app(Arc::new(store))).await;
  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/items").to_request()).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({"success": false, "error": "Database operation failed"}));

  // Health does not depend on the database.
  let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
}
