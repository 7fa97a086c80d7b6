// shopping_list/src/web/handlers/item_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{error, info, instrument, warn};

use crate::errors::{AppError, Result};
use crate::models::{CreateItemPayload, UpdateItemPayload};
use crate::state::AppState;
use crate::web::response::ApiResponse;

fn item_not_found(item_id: i32) -> AppError {
  warn!("Item with ID {} not found.", item_id);
  AppError::NotFound("Item not found".to_string())
}

fn log_store_error(operation: &str) -> impl FnOnce(AppError) -> AppError + '_ {
  move |e| {
    error!(error = %e, "Store failure while trying to {}.", operation);
    e
  }
}

#[instrument(name = "handler::list_items", skip(app_state))]
pub async fn list_items_handler(app_state: web::Data<AppState>) -> Result<HttpResponse> {
  let items = app_state.store.list().await.map_err(log_store_error("list items"))?;

  info!("Successfully fetched {} items.", items.len());
  Ok(HttpResponse::Ok().json(ApiResponse::success(items)))
}

#[instrument(name = "handler::get_item", skip(app_state, path), fields(item_id = %path.as_ref()))]
pub async fn get_item_handler(app_state: web::Data<AppState>, path: web::Path<i32>) -> Result<HttpResponse> {
  let item_id = path.into_inner();

  match app_state.store.get(item_id).await.map_err(log_store_error("fetch an item"))? {
    Some(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(item))),
    None => Err(item_not_found(item_id)),
  }
}

#[instrument(name = "handler::create_item", skip(app_state, req_payload))]
pub async fn create_item_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateItemPayload>,
) -> Result<HttpResponse> {
  let new_item = req_payload.into_inner().validate()?;

  let item = app_state
    .store
    .create(new_item)
    .await
    .map_err(log_store_error("create an item"))?;

  info!(item_id = item.id, "Item created.");
  Ok(HttpResponse::Created().json(ApiResponse::success(item)))
}

#[instrument(name = "handler::update_item", skip(app_state, path, req_payload), fields(item_id = %path.as_ref()))]
pub async fn update_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
  req_payload: web::Json<UpdateItemPayload>,
) -> Result<HttpResponse> {
  let item_id = path.into_inner();
  let changes = req_payload.into_inner().validate()?;

  match app_state
    .store
    .update(item_id, changes)
    .await
    .map_err(log_store_error("update an item"))?
  {
    Some(item) => {
      info!("Item {} updated.", item_id);
      Ok(HttpResponse::Ok().json(ApiResponse::success(item)))
    }
    None => Err(item_not_found(item_id)),
  }
}

#[instrument(name = "handler::delete_item", skip(app_state, path), fields(item_id = %path.as_ref()))]
pub async fn delete_item_handler(app_state: web::Data<AppState>, path: web::Path<i32>) -> Result<HttpResponse> {
  let item_id = path.into_inner();

  match app_state
    .store
    .delete(item_id)
    .await
    .map_err(log_store_error("delete an item"))?
  {
    Some(deleted) => {
      info!(name = %deleted.name, "Item {} deleted.", item_id);
      Ok(HttpResponse::Ok().json(ApiResponse::message("Item deleted")))
    }
    None => Err(item_not_found(item_id)),
  }
}
