// shopping_list/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use sqlx::postgres::PgConnectOptions;
use std::env;
use std::fmt;

#[derive(Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  pub db_host: String,
  pub db_port: u16,
  pub db_name: String,
  pub db_user: String,
  pub db_password: String,
  pub db_max_connections: u32,
  pub db_acquire_timeout_ms: u64,

  // Empty means any origin is accepted.
  pub cors_origins: Vec<String>,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from an arbitrary key lookup, falling back to
  /// the documented default for every unset key.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_or = |var_name: &str, default: &str| lookup(var_name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("HOST", "0.0.0.0");
    let server_port = parse_var::<u16>("PORT", &get_or("PORT", "3000"))?;

    let db_host = get_or("DB_HOST", "localhost");
    let db_port = parse_var::<u16>("DB_PORT", &get_or("DB_PORT", "5432"))?;
    let db_name = get_or("DB_NAME", "shopping_list");
    let db_user = get_or("DB_USER", "postgres");
    let db_password = get_or("DB_PASSWORD", "postgres");
    let db_max_connections = parse_var::<u32>("DB_MAX_CONNECTIONS", &get_or("DB_MAX_CONNECTIONS", "10"))?;
    let db_acquire_timeout_ms =
      parse_var::<u64>("DB_ACQUIRE_TIMEOUT_MS", &get_or("DB_ACQUIRE_TIMEOUT_MS", "30000"))?;

    let cors_origins = get_or("CORS_ORIGINS", "")
      .split(',')
      .map(str::trim)
      .filter(|origin| !origin.is_empty())
      .map(String::from)
      .collect();

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      db_host,
      db_port,
      db_name,
      db_user,
      db_password,
      db_max_connections,
      db_acquire_timeout_ms,
      cors_origins,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }

  pub fn connect_options(&self) -> PgConnectOptions {
    PgConnectOptions::new()
      .host(&self.db_host)
      .port(self.db_port)
      .database(&self.db_name)
      .username(&self.db_user)
      .password(&self.db_password)
  }
}

fn parse_var<T>(var_name: &str, raw: &str) -> Result<T>
where
  T: std::str::FromStr,
  T::Err: fmt::Display,
{
  raw
    .trim()
    .parse::<T>()
    .map_err(|e| AppError::Config(format!("Invalid {}: {}", var_name, e)))
}

// Keeps the password out of logs.
impl fmt::Debug for AppConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AppConfig")
      .field("server_host", &self.server_host)
      .field("server_port", &self.server_port)
      .field("db_host", &self.db_host)
      .field("db_port", &self.db_port)
      .field("db_name", &self.db_name)
      .field("db_user", &self.db_user)
      .field("db_password", &"[REDACTED]")
      .field("db_max_connections", &self.db_max_connections)
      .field("db_acquire_timeout_ms", &self.db_acquire_timeout_ms)
      .field("cors_origins", &self.cors_origins)
      .finish()
  }
}
