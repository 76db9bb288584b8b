use crate::db::models::Todo;
use crate::db::schema::SQLITE_INIT;
use crate::error::TodoError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct TodoStorage {
    pool: SqlitePool,
}

impl TodoStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url`, creating the database file if missing.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, TodoError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TodoError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new, incomplete todo. Returns the freshly assigned id.
    pub async fn insert(&self, title: &str, description: &str) -> Result<i64, TodoError> {
        let mut tx = self.pool.begin().await?;
        let id = sqlx::query("INSERT INTO todos (title, description, complete) VALUES (?, ?, 0)")
            .bind(title)
            .bind(description)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        tx.commit().await?;
        Ok(id)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Todo>, TodoError> {
        let todo = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, complete FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(todo)
    }

    /// All todos in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Todo>, TodoError> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, complete FROM todos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(todos)
    }

    pub async fn update_complete(&self, id: i64, complete: bool) -> Result<(), TodoError> {
        let mut tx = self.pool.begin().await?;
        let affected = sqlx::query("UPDATE todos SET complete = ? WHERE id = ?")
            .bind(complete)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if affected == 0 {
            return Err(TodoError::NotFound(id));
        }
        tx.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), TodoError> {
        let mut tx = self.pool.begin().await?;
        let affected = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if affected == 0 {
            return Err(TodoError::NotFound(id));
        }
        tx.commit().await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
