// shopping_list/src/models/mod.rs

//! Contains data structures representing database entities and request bodies.

pub mod item;

// Re-export the model structs for convenient access
pub use item::{CreateItemPayload, Item, ItemChanges, ItemStats, NewItem, UpdateItemPayload, DEFAULT_QUANTITY, MAX_NAME_LENGTH};
