//! SQL DDL for initializing the todo storage.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, so ids of deleted rows are never handed out again
/// - `title` / `description` required and non-blank (CHECK)
/// - `complete` BOOLEAN (stored as INTEGER 0/1), default 0
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (length(trim(title)) > 0),
    description TEXT NOT NULL CHECK (length(trim(description)) > 0),
    complete INTEGER NOT NULL DEFAULT 0
);
"#;
