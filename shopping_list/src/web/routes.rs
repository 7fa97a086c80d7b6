// shopping_list/src/web/routes.rs

use actix_web::{error, web, HttpResponse};
use chrono::Utc;
use tracing::warn;

use crate::errors::AppError;
use crate::web::handlers::{item_handlers, stats_handlers};

// Liveness only; it does not touch the database.
async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok", "timestamp": Utc::now() }))
}

// Unknown paths and unsupported methods still answer with the error envelope.
async fn route_not_found_handler() -> Result<HttpResponse, AppError> {
  Err(AppError::NotFound("Route not found".to_string()))
}

/// Turns body deserialization failures (malformed JSON, wrong field types such
/// as a non-numeric `quantity`) into enveloped 400 responses.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req| {
    warn!(error = %err, "Rejected request body.");
    AppError::Validation(format!("Invalid request body: {}", err)).into()
  })
}

fn path_config() -> web::PathConfig {
  web::PathConfig::default().error_handler(|err: error::PathError, _req| {
    warn!(error = %err, "Rejected path parameter.");
    AppError::Validation("Item id must be an integer".to_string()).into()
  })
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .app_data(path_config())
    .default_service(web::to(route_not_found_handler))
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/api")
        .service(
          web::scope("/items")
            .route("", web::get().to(item_handlers::list_items_handler))
            .route("", web::post().to(item_handlers::create_item_handler))
            .route("/{id}", web::get().to(item_handlers::get_item_handler))
            .route("/{id}", web::put().to(item_handlers::update_item_handler))
            .route("/{id}", web::delete().to(item_handlers::delete_item_handler)),
        )
        .route("/stats", web::get().to(stats_handlers::item_stats_handler)),
    );
}
