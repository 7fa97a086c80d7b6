// shopping_list/src/web/handlers/stats_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{error, info, instrument};

use crate::errors::Result;
use crate::state::AppState;
use crate::web::response::ApiResponse;

#[instrument(name = "handler::item_stats", skip(app_state))]
pub async fn item_stats_handler(app_state: web::Data<AppState>) -> Result<HttpResponse> {
  let stats = app_state.store.stats().await.map_err(|e| {
    error!(error = %e, "Failed to compute item stats.");
    e
  })?;

  info!(total = stats.total, purchased = stats.purchased, pending = stats.pending, "Item stats computed.");
  Ok(HttpResponse::Ok().json(ApiResponse::success(stats)))
}
