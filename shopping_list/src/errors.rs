// shopping_list/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::web::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),
}

impl AppError {
  /// The message placed in the `error` field of the response envelope.
  ///
  /// Server-side failures never echo their internals back to the caller.
  pub fn public_message(&self) -> String {
    match self {
      AppError::Validation(m) | AppError::NotFound(m) => m.clone(),
      AppError::Config(_) => "Configuration issue".to_string(),
      AppError::Sqlx(_) => "Database operation failed".to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Sqlx(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    // Log the full error when it's turned into a response
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with client error");
    }
    HttpResponse::build(status).json(ApiResponse::<()>::failure(self.public_message()))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
