// shopping_list/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod response;
pub mod routes;

pub use routes::configure_app_routes;

use actix_cors::Cors;

/// Cross-origin policy: any origin when `origins` is empty, otherwise only the
/// listed ones. Methods and headers are always open.
pub fn cors_layer(origins: &[String]) -> Cors {
  if origins.is_empty() {
    return Cors::default()
      .allow_any_origin()
      .allow_any_method()
      .allow_any_header()
      .max_age(3600);
  }

  origins
    .iter()
    .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    .allow_any_method()
    .allow_any_header()
    .max_age(3600)
}
