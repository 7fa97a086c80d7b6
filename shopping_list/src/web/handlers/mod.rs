// shopping_list/src/web/handlers/mod.rs

// Declare handler modules
pub mod item_handlers;
pub mod stats_handlers;
