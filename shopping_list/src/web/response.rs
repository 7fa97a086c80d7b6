// shopping_list/src/web/response.rs

//! The uniform JSON envelope wrapped around every `/api` response.

use serde::Serialize;

/// `{success, data}` on success, `{success, message}` for acknowledgements,
/// `{success: false, error}` on failure. Absent fields are omitted.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<T>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
  pub fn success(data: T) -> Self {
    Self {
      success: true,
      data: Some(data),
      message: None,
      error: None,
    }
  }

  pub fn failure(error: impl Into<String>) -> Self {
    Self {
      success: false,
      data: None,
      message: None,
      error: Some(error.into()),
    }
  }
}

impl ApiResponse<()> {
  pub fn message(message: impl Into<String>) -> Self {
    Self {
      success: true,
      data: None,
      message: Some(message.into()),
      error: None,
    }
  }
}
