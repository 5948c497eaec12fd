pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod identity;
pub mod models;
pub mod raw_sql;
pub mod schema;
pub mod store;
pub mod validation;

use std::sync::Arc;

/// Application state shared across all handlers
pub type AppState = Arc<store::RecipeStore>;
