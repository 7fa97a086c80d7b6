// shopping_list/src/models/item.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::{AppError, Result};

/// Quantity stored when the caller omits one or sends a non-positive value.
pub const DEFAULT_QUANTITY: i32 = 1;

/// Matches the `VARCHAR(255)` column; counted in characters, as PostgreSQL does.
pub const MAX_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Item {
  pub id: i32,
  pub name: String,
  pub quantity: i32,
  pub purchased: bool,
  pub created_at: DateTime<Utc>,
}

/// Validated input for inserting a new item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
  pub name: String,
  pub quantity: i32,
}

/// Validated partial update. `None` means "leave the stored value as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
  pub name: Option<String>,
  pub quantity: Option<i32>,
  pub purchased: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, FromRow)]
pub struct ItemStats {
  pub total: i64,
  pub purchased: i64,
  pub pending: i64,
}

// --- Request DTOs ---

#[derive(Deserialize, Debug, Default)]
pub struct CreateItemPayload {
  pub name: Option<String>,
  pub quantity: Option<i32>,
}

#[derive(Deserialize, Debug, Default)]
pub struct UpdateItemPayload {
  pub name: Option<String>,
  pub quantity: Option<i32>,
  pub purchased: Option<bool>,
}

impl CreateItemPayload {
  /// Rejects a missing or blank name; non-positive quantities fall back to
  /// [`DEFAULT_QUANTITY`] instead of being rejected.
  pub fn validate(self) -> Result<NewItem> {
    let name = required_name(self.name)?;
    let quantity = match self.quantity {
      Some(q) if q > 0 => q,
      _ => DEFAULT_QUANTITY,
    };
    Ok(NewItem { name, quantity })
  }
}

impl UpdateItemPayload {
  pub fn validate(self) -> Result<ItemChanges> {
    let name = match self.name {
      Some(raw) => Some(required_name(Some(raw))?),
      None => None,
    };
    if let Some(q) = self.quantity {
      if q < 1 {
        return Err(AppError::Validation("Quantity must be a positive number".to_string()));
      }
    }
    Ok(ItemChanges {
      name,
      quantity: self.quantity,
      purchased: self.purchased,
    })
  }
}

fn required_name(raw: Option<String>) -> Result<String> {
  match raw.as_deref().map(str::trim) {
    Some(name) if name.chars().count() > MAX_NAME_LENGTH => Err(AppError::Validation(format!(
      "Name must be at most {} characters",
      MAX_NAME_LENGTH
    ))),
    Some(name) if !name.is_empty() => Ok(name.to_string()),
    _ => Err(AppError::Validation("Name is required".to_string())),
  }
}
