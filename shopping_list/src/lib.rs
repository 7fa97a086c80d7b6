// src/lib.rs

//! A small shopping-list HTTP service.
//!
//! Exposes CRUD endpoints over a single `items` table in PostgreSQL:
//!  - `config`: environment-driven settings (server, database, CORS).
//!  - `db`: pool construction, idempotent schema bootstrap, and the `ItemStore` seam.
//!  - `models`: the `Item` record, its validated inputs, and request bodies.
//!  - `web`: routes, handlers, and the `{success, data|error}` response envelope.
//!
//! The process keeps no item state of its own; every request maps onto one SQL statement.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
