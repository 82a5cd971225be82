//! Data models
//!
//! Received from the backend and held only in view state. All IDs are `i64`
//! (the backend uses SQLite INTEGER PRIMARY KEY).

pub mod dining_table;
pub mod reservation;

// Re-exports
pub use dining_table::*;
pub use reservation::*;
