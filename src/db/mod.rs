//! Database module: model and schema for persistent todo storage.
//!
//! Layout:
//! - `models.rs`: Rust struct mirroring a `todos` row
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pool-backed CRUD access

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::Todo;
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, TodoStorage};
