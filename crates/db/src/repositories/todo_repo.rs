//! Repository for the `todos` table.
//!
//! Every method runs exactly one statement on the connection it is given.
//! Callers own the connection's lifetime; nothing here opens a transaction.

use sqlx::PgConnection;
use todo_core::types::DbId;

use crate::error::DbError;
use crate::models::todo::{CreateTodo, ToDo, UpdateTodo};

/// Column list for `todos` queries.
const COLUMNS: &str = "id, title, description, insert_at, update_at";

/// Provides CRUD operations for ToDo records.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new ToDo, returning the id assigned by the database.
    pub async fn create(conn: &mut PgConnection, input: &CreateTodo) -> Result<DbId, DbError> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO todos (title, description, insert_at, update_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.insert_at)
        .bind(input.update_at)
        .fetch_one(&mut *conn)
        .await?;
        Ok(id)
    }

    /// Fetch the ToDo with the given id.
    ///
    /// Fails with [`DbError::NotFound`] when no row matches and with
    /// [`DbError::DuplicateId`] when more than one does.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<ToDo, DbError> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        let mut rows = sqlx::query_as::<_, ToDo>(&query)
            .bind(id)
            .fetch_all(&mut *conn)
            .await?;

        match rows.len() {
            0 => Err(DbError::NotFound(id)),
            1 => Ok(rows.remove(0)),
            count => Err(DbError::DuplicateId { id, count }),
        }
    }

    /// Update title, description and update time. Returns the affected row count.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE todos SET title = $2, description = $3, update_at = $4
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.update_at)
        .execute(&mut *conn)
        .await?;

        match result.rows_affected() {
            0 => Err(DbError::NotFound(id)),
            n => Ok(n),
        }
    }

    /// Delete a ToDo by id. Returns the affected row count.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        match result.rows_affected() {
            0 => Err(DbError::NotFound(id)),
            n => Ok(n),
        }
    }

    /// List every ToDo in the table's natural scan order.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<ToDo>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM todos");
        let rows = sqlx::query_as::<_, ToDo>(&query)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }
}
