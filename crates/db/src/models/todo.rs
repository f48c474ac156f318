//! ToDo models and DTOs.

use sqlx::FromRow;
use todo_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ToDo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub insert_at: Timestamp,
    pub update_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for inserting a new ToDo. The id is assigned by the database.
#[derive(Debug, Clone)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
    pub insert_at: Timestamp,
    pub update_at: Timestamp,
}

/// DTO for updating a ToDo. `id` and `insert_at` are never changed.
#[derive(Debug, Clone)]
pub struct UpdateTodo {
    pub title: String,
    pub description: String,
    pub update_at: Timestamp,
}
